// ABOUTME: Stage name validation.
// ABOUTME: A stage scopes a service deployment (dev, prod, ...).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_STAGE: &str = "dev";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StageError {
    #[error("stage cannot be empty")]
    Empty,

    #[error("invalid character in stage: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Stage(String);

impl Stage {
    pub fn new(value: &str) -> Result<Self, StageError> {
        if value.is_empty() {
            return Err(StageError::Empty);
        }

        if let Some(c) = value.chars().find(|c| *c == '/' || c.is_whitespace()) {
            return Err(StageError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self(DEFAULT_STAGE.to_string())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Stage::new(&s).map_err(serde::de::Error::custom)
    }
}
