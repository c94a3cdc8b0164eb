//! Sample model: a person with a name, birth year, and favourite food.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::constraint::Checker;
use crate::error::ModelError;
use crate::model::Model;

static FORBIDDEN_FOOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Revenge$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUser {
    name: String,
    birthyear: i32,
    /// Anything but "Revenge".
    favorite_food: String,
    /// When this value was constructed.
    generated_time: DateTime<Utc>,
}

impl ExampleUser {
    /// Build and validate a user stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        birthyear: i32,
        favorite_food: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self {
            name: name.into(),
            birthyear,
            favorite_food: favorite_food.into(),
            generated_time: Utc::now(),
        }
        .validated()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthyear(&self) -> i32 {
        self.birthyear
    }

    pub fn favorite_food(&self) -> &str {
        &self.favorite_food
    }

    pub fn generated_time(&self) -> DateTime<Utc> {
        self.generated_time
    }
}

impl Model for ExampleUser {
    fn constraints(&self, checker: &mut Checker) {
        checker.field("favoriteFood").not_matching(
            &self.favorite_food,
            &FORBIDDEN_FOOD_RE,
            "favoriteFood must not be 'Revenge'",
        );
    }
}
