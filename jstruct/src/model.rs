//! The `Model` capability: JSON encode/decode plus validation.
//!
//! Writing is best-effort: [`Model::write_json`] returns `false` and logs the
//! cause on any failure. Reading always returns typed errors, and the
//! validating readers reject decoded values that break their constraints.

use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::error::{ValidationError, ValidationErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::core::constraint::Checker;
use crate::core::format::render;
use crate::core::violation::{Violation, Violations, path_from_pointer};
use crate::error::ModelError;
use crate::io::config::JstructConfig;
use crate::io::path::resolve_path;

/// A record type that can be stored as JSON and validated.
///
/// Implementors derive `Serialize`/`Deserialize` and optionally override
/// [`constraints`](Model::constraints) and [`schema`](Model::schema).
/// Constructors should end with [`validated`](Model::validated) so an
/// invalid value is never handed out.
pub trait Model: Serialize + DeserializeOwned {
    /// Short type name used in errors and logs.
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Declare field rules. The default declares none.
    fn constraints(&self, _checker: &mut Checker) {}

    /// Optional JSON Schema applied to the encoded value during validation.
    fn schema() -> Option<Value> {
        None
    }

    /// Encode as JSON text; see [`render`] for the meaning of `indent`.
    fn to_json(&self, indent: i32) -> Result<String, ModelError> {
        render(self, indent).map_err(|source| ModelError::Encode {
            type_name: Self::type_name(),
            source,
        })
    }

    /// Encode and write to `path`, replacing any existing file.
    ///
    /// Returns `false` if resolving, encoding, or writing fails.
    fn write_json(&self, path: impl AsRef<Path>, indent: i32) -> bool {
        self.write_json_with(path, indent, &JstructConfig::default())
    }

    fn write_json_with(
        &self,
        path: impl AsRef<Path>,
        indent: i32,
        config: &JstructConfig,
    ) -> bool {
        match write_file(self, path.as_ref(), indent, config) {
            Ok(written) => {
                info!(
                    type_name = Self::type_name(),
                    path = %written.display(),
                    "serialized to json"
                );
                true
            }
            Err(err) => {
                error!(
                    type_name = Self::type_name(),
                    err = %format!("{:#}", anyhow::Error::new(err)),
                    "failed to serialize to json"
                );
                false
            }
        }
    }

    /// Read, decode, and validate the model stored at `path`.
    fn read_json(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::read_json_with(path, &JstructConfig::default())
    }

    fn read_json_with(path: impl AsRef<Path>, config: &JstructConfig) -> Result<Self, ModelError> {
        read_file::<Self>(path.as_ref(), config)?.validated()
    }

    /// Read and decode without running validation.
    fn read_json_unchecked(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::read_json_unchecked_with(path, &JstructConfig::default())
    }

    fn read_json_unchecked_with(
        path: impl AsRef<Path>,
        config: &JstructConfig,
    ) -> Result<Self, ModelError> {
        read_file(path.as_ref(), config)
    }

    /// Decode and validate JSON text.
    fn from_json(text: &str) -> Result<Self, ModelError> {
        decode::<Self>(text)?.validated()
    }

    /// Evaluate every rule and schema keyword, collecting all failures.
    fn violations(&self) -> Result<Violations, ModelError> {
        let mut checker = Checker::new();
        self.constraints(&mut checker);
        let mut violations = checker.into_violations();
        if let Some(schema) = Self::schema() {
            violations.extend(schema_violations(self, &schema)?);
        }
        Ok(violations)
    }

    /// Fail with [`ModelError::Validation`] if any rule is violated.
    fn validate(&self) -> Result<(), ModelError> {
        let violations = self.violations()?;
        if violations.is_empty() {
            return Ok(());
        }
        for violation in &violations {
            warn!(
                type_name = Self::type_name(),
                path = %violation.path,
                message = %violation.message,
                "constraint violated"
            );
        }
        Err(ModelError::Validation {
            type_name: Self::type_name(),
            violations,
        })
    }

    /// Validate and hand the value back; the tail call of a constructor.
    fn validated(self) -> Result<Self, ModelError> {
        self.validate()?;
        Ok(self)
    }

    /// `TypeName{...}` rendering with the compact JSON body.
    fn describe(&self) -> String {
        match self.to_json(0) {
            Ok(json) => format!("{}{}", Self::type_name(), json),
            Err(err) => format!("{}{{{}}}", Self::type_name(), err),
        }
    }
}

fn write_file<M: Model>(
    model: &M,
    path: &Path,
    indent: i32,
    config: &JstructConfig,
) -> Result<PathBuf, ModelError> {
    let path = resolve_path(path, false, &config.extension)?;
    debug!(path = %path.display(), indent, "serializing");
    let mut text = model.to_json(indent)?;
    if config.trailing_newline {
        text.push('\n');
    }
    fs::write(&path, text).map_err(|source| ModelError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn read_file<M: Model>(path: &Path, config: &JstructConfig) -> Result<M, ModelError> {
    let path = resolve_path(path, true, &config.extension)?;
    debug!(path = %path.display(), type_name = M::type_name(), "deserializing");
    let text = fs::read_to_string(&path).map_err(|source| ModelError::Read {
        path: path.clone(),
        source,
    })?;
    decode(&text)
}

fn decode<M: Model>(text: &str) -> Result<M, ModelError> {
    serde_json::from_str(text).map_err(|source| ModelError::Decode {
        type_name: M::type_name(),
        source,
    })
}

fn schema_violations<M: Model>(
    model: &M,
    schema: &Value,
) -> Result<Vec<Violation>, ModelError> {
    let validator = jsonschema::validator_for(schema).map_err(|err| ModelError::Schema {
        type_name: M::type_name(),
        message: err.to_string(),
    })?;
    let instance = serde_json::to_value(model).map_err(|source| ModelError::Encode {
        type_name: M::type_name(),
        source,
    })?;
    let violations = validator
        .iter_errors(&instance)
        .map(|err| schema_violation(&err))
        .collect();
    Ok(violations)
}

/// Schema errors are reported at the failing instance; `required` points one
/// level deeper, at the missing property.
fn schema_violation(err: &ValidationError<'_>) -> Violation {
    let mut path = path_from_pointer(&err.instance_path.to_string());
    if let ValidationErrorKind::Required { property } = &err.kind {
        if let Some(name) = property.as_str() {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(name);
        }
    }
    Violation::new(path, err.to_string())
}

/// `a::b::Name<c::D>` -> `Name`.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
