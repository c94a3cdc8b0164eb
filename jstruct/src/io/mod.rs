//! I/O helpers for model persistence.

pub mod config;
pub mod path;
