//! Deterministic, pure logic shared by the model layer.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod constraint;
pub mod format;
pub mod violation;
