//! Error taxonomy for model encoding, decoding, and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::violation::Violations;

/// Failure to turn a user-supplied location into a usable path.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("cannot make {} absolute", path.display())]
    Absolute {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot resolve {}", path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a regular file", path.display())]
    NotAFile { path: PathBuf },
}

/// Errors surfaced by [`Model`](crate::Model) operations.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("encode {type_name}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("decode {type_name}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid schema for {type_name}: {message}")]
    Schema {
        type_name: &'static str,
        message: String,
    },
    #[error("{type_name} failed validation: {violations}")]
    Validation {
        type_name: &'static str,
        violations: Violations,
    },
}

impl ModelError {
    /// Violations carried by a validation failure, if this is one.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            ModelError::Validation { violations, .. } => Some(violations),
            _ => None,
        }
    }
}
