//! Test-only models and scratch directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::core::constraint::Checker;
use crate::model::Model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub age: i64,
}

impl Model for Member {
    fn constraints(&self, checker: &mut Checker) {
        checker.field("name").not_blank(&self.name);
        checker.field("age").range(self.age, 0..=120);
    }
}

/// Nested model with a timestamp, a nested model field, and a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub name: String,
    pub leader: Member,
    pub members: Vec<Member>,
    pub founded: DateTime<Utc>,
}

impl Model for Household {
    fn constraints(&self, checker: &mut Checker) {
        checker.field("name").not_blank(&self.name);
        checker.field("leader").nested(&self.leader);
        checker.field("members").each(&self.members);
    }

    fn schema() -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "members": { "type": "array", "maxItems": 8 }
            }
        }))
    }
}

/// Create a valid member.
pub fn member(name: &str, age: i64) -> Member {
    Member {
        name: name.to_string(),
        age,
    }
}

/// Create a valid household with a fixed, sub-second founding time.
pub fn household(name: &str) -> Household {
    Household {
        name: name.to_string(),
        leader: member("Dutch", 44),
        members: vec![member("Arthur", 36), member("John", 26)],
        founded: DateTime::from_timestamp(-2_240_524_800, 123_456_789)
            .expect("valid timestamp"),
    }
}

/// Temporary directory that disappears when dropped.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the scratch directory (not created).
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.path(name))
    }
}
