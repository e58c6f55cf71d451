//! Profile domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Youngest age accepted on a profile
pub const MIN_PROFILE_AGE: i32 = 18;

/// Oldest age accepted on a profile
pub const MAX_PROFILE_AGE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Occupation {
    Salaried,
    Business,
    Freelancer,
    Student,
    Retired,
}

impl Occupation {
    pub const ALL: [Occupation; 5] = [
        Occupation::Salaried,
        Occupation::Business,
        Occupation::Freelancer,
        Occupation::Student,
        Occupation::Retired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Salaried => "Salaried",
            Occupation::Business => "Business",
            Occupation::Freelancer => "Freelancer",
            Occupation::Student => "Student",
            Occupation::Retired => "Retired",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occupation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Occupation::ALL
            .iter()
            .copied()
            .find(|o| o.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown occupation: {}", s))
    }
}

impl TryFrom<String> for Occupation {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Demographic profile, at most one per user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub user_id: String,
    pub age: i32,
    pub dependents: i32,
    pub occupation: Occupation,
}

impl Profile {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user_id".to_string()).into());
        }
        if !(MIN_PROFILE_AGE..=MAX_PROFILE_AGE).contains(&self.age) {
            return Err(ValidationError::OutOfRange {
                field: "age".to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_PROFILE_AGE, MAX_PROFILE_AGE, self.age
                ),
            }
            .into());
        }
        if self.dependents < 0 {
            return Err(ValidationError::OutOfRange {
                field: "dependents".to_string(),
                message: format!("must be zero or more, got {}", self.dependents),
            }
            .into());
        }
        Ok(())
    }
}
