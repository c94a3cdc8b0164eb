//! Lightweight JSON data models with declarative field validation.
//!
//! A record type opts in by deriving `Serialize`/`Deserialize` and
//! implementing [`Model`]. The crate is split the same way throughout:
//!
//! - **[`core`]**: Pure logic (violations, constraint checking, JSON
//!   rendering). No I/O.
//! - **[`io`]**: Filesystem-facing helpers (path resolution, configuration).
//!
//! [`model`] ties the two together: encoding and writing is best-effort and
//! reports a `bool`, while reading always validates and returns typed errors.

pub mod core;
pub mod error;
pub mod example;
pub mod io;
pub mod logging;
pub mod model;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::constraint::Checker;
pub use crate::core::violation::{Violation, Violations};
pub use crate::error::{ModelError, PathError};
pub use crate::io::config::JstructConfig;
pub use crate::model::Model;
