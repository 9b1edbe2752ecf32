//! Construction modes for default-constructed wrappers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What default construction does when the initial value fails validation.
///
/// Explicit-value construction always validates; the mode only matters for
/// defaults, which are not required to satisfy the validation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionMode {
    /// Fail construction.
    #[default]
    Strict,
    /// Accept the value and mark the wrapper pending until it is replaced.
    Deferred,
}

impl ConstructionMode {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Deferred => "deferred",
        }
    }

    /// Returns true when an invalid default is accepted.
    #[must_use]
    pub const fn defers_validation(self) -> bool {
        matches!(self, Self::Deferred)
    }
}

impl fmt::Display for ConstructionMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unrecognized construction mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown construction mode `{input}` (expected `strict` or `deferred`)")]
pub struct ModeParseError {
    input: String,
}

impl ModeParseError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ConstructionMode {
    type Err = ModeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("strict") {
            Ok(Self::Strict)
        } else if trimmed.eq_ignore_ascii_case("deferred") {
            Ok(Self::Deferred)
        } else {
            Err(ModeParseError {
                input: input.to_owned(),
            })
        }
    }
}
