//! Declarative field rules.
//!
//! A model lists its rules in [`Model::constraints`] by naming each field and
//! chaining checks on it:
//!
//! ```
//! # use jstruct::Checker;
//! # struct Camp { name: String, size: i64 }
//! # impl Camp {
//! fn constraints(&self, checker: &mut Checker) {
//!     checker.field("name").not_blank(&self.name).length(&self.name, 1..=32);
//!     checker.field("size").range(self.size, 1..=40);
//! }
//! # }
//! ```
//!
//! Every rule runs; a failing rule records a [`Violation`] and checking
//! continues with the next one.

use std::ops::RangeInclusive;

use regex::Regex;

use crate::core::violation::{Violation, Violations};
use crate::model::Model;

/// Collects violations while walking a model's fields.
#[derive(Debug, Default)]
pub struct Checker {
    prefix: String,
    violations: Violations,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    fn scoped(prefix: String) -> Self {
        Self {
            prefix,
            violations: Violations::new(),
        }
    }

    /// Start checking the field `name` of the current model.
    pub fn field(&mut self, name: &str) -> Field<'_> {
        let path = join_path(&self.prefix, name);
        Field {
            checker: self,
            path,
        }
    }

    /// Record a violation against the current model as a whole.
    pub fn reject(&mut self, message: impl Into<String>) {
        let path = self.prefix.clone();
        self.violations.push(Violation::new(path, message));
    }

    pub fn into_violations(self) -> Violations {
        self.violations
    }
}

/// Rules applied to one field path. Methods chain so several rules can be
/// stated for the same field.
#[derive(Debug)]
pub struct Field<'a> {
    checker: &'a mut Checker,
    path: String,
}

impl Field<'_> {
    /// Record a violation with `message` unless `ok` holds.
    pub fn check(self, ok: bool, message: impl Into<String>) -> Self {
        if !ok {
            self.checker
                .violations
                .push(Violation::new(self.path.clone(), message));
        }
        self
    }

    /// `value` must match `pattern`.
    pub fn matches(self, value: &str, pattern: &Regex, message: &str) -> Self {
        let ok = pattern.is_match(value);
        self.check(ok, message)
    }

    /// `value` must not match `pattern`.
    pub fn not_matching(self, value: &str, pattern: &Regex, message: &str) -> Self {
        let ok = !pattern.is_match(value);
        self.check(ok, message)
    }

    /// `value` must contain something other than whitespace.
    pub fn not_blank(self, value: &str) -> Self {
        let ok = !value.trim().is_empty();
        self.check(ok, "must not be blank")
    }

    /// Character count of `value` must lie within `bounds`.
    pub fn length(self, value: &str, bounds: RangeInclusive<usize>) -> Self {
        let len = value.chars().count();
        let ok = bounds.contains(&len);
        self.check(
            ok,
            format!(
                "length {} outside {}..={}",
                len,
                bounds.start(),
                bounds.end()
            ),
        )
    }

    /// `value` must lie within `bounds`.
    pub fn range(self, value: i64, bounds: RangeInclusive<i64>) -> Self {
        let ok = bounds.contains(&value);
        self.check(
            ok,
            format!("{} outside {}..={}", value, bounds.start(), bounds.end()),
        )
    }

    /// Run the rules of a nested model, reporting under this field's path.
    pub fn nested<M: Model>(self, value: &M) -> Self {
        let mut child = Checker::scoped(self.path.clone());
        value.constraints(&mut child);
        self.checker.violations.extend(child.violations);
        self
    }

    /// Run the rules of every element, reporting under `path[i]`.
    pub fn each<M: Model>(self, values: &[M]) -> Self {
        for (index, value) in values.iter().enumerate() {
            let mut child = Checker::scoped(format!("{}[{}]", self.path, index));
            value.constraints(&mut child);
            self.checker.violations.extend(child.violations);
        }
        self
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
