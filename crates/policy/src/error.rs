//! Domain errors raised by validation and default-value strategies.

use guarded_shared::{ErrorCode, ErrorEnvelope};
use std::any::type_name;
use std::borrow::Cow;
use std::fmt::Debug;

/// Why a candidate value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Value is smaller than the configured minimum.
    #[error("must be at least {min}")]
    BelowMinimum {
        /// Rendered minimum bound.
        min: String,
    },
    /// Value is larger than the configured maximum.
    #[error("must be at most {max}")]
    AboveMaximum {
        /// Rendered maximum bound.
        max: String,
    },
    /// Value falls outside an inclusive range.
    #[error("must be within [{min}, {max}]")]
    OutOfRange {
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },
    /// Text is longer than allowed.
    #[error("length {length} exceeds the maximum of {max_length}")]
    TooLong {
        /// Length of the rejected text, in characters.
        length: usize,
        /// Maximum allowed length, in characters.
        max_length: usize,
    },
    /// Container holds more elements than allowed.
    #[error("size {size} exceeds the maximum of {max_size}")]
    TooLarge {
        /// Element count of the rejected container.
        size: usize,
        /// Maximum allowed element count.
        max_size: usize,
    },
    /// Text is empty.
    #[error("must not be empty")]
    Empty,
    /// Free-form rejection from a custom strategy.
    #[error("{reason}")]
    Rejected {
        /// Human-readable reason.
        reason: Cow<'static, str>,
    },
}

impl Violation {
    /// Value is below `min`.
    pub fn below_minimum<B: Debug + ?Sized>(min: &B) -> Self {
        Self::BelowMinimum {
            min: format!("{min:?}"),
        }
    }

    /// Value is above `max`.
    pub fn above_maximum<B: Debug + ?Sized>(max: &B) -> Self {
        Self::AboveMaximum {
            max: format!("{max:?}"),
        }
    }

    /// Value is outside `[min, max]`.
    pub fn out_of_range<B: Debug + ?Sized>(min: &B, max: &B) -> Self {
        Self::OutOfRange {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Custom rejection reason.
    pub fn rejected(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Failure raised when a guarded value cannot be constructed, changed or re-checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A candidate failed its validation strategy.
    #[error("invalid value {value}: {violation}")]
    InvalidValue {
        /// Debug rendering of the rejected value.
        value: String,
        /// The rule that was broken.
        violation: Violation,
    },
    /// Default construction was attempted without an initial value.
    #[error("no initial value is configured for {type_name}")]
    MissingInitialValue {
        /// Name of the underlying type.
        type_name: &'static str,
    },
    /// Aliased storage was changed outside the wrapper and is no longer valid.
    #[error("referenced value {value} no longer satisfies its validation: {violation}")]
    StaleReference {
        /// Debug rendering of the aliased value.
        value: String,
        /// The rule that is now broken.
        violation: Violation,
    },
}

impl DomainError {
    /// Reject `value` for the given reason.
    pub fn invalid<T: Debug + ?Sized>(value: &T, violation: Violation) -> Self {
        Self::InvalidValue {
            value: format!("{value:?}"),
            violation,
        }
    }

    /// No initial value is available for `T`.
    pub fn missing_initial<T: ?Sized>() -> Self {
        Self::MissingInitialValue {
            type_name: type_name::<T>(),
        }
    }

    /// Re-label an invalid value as detected tampering of aliased storage.
    #[must_use]
    pub fn into_stale(self) -> Self {
        match self {
            Self::InvalidValue { value, violation } => Self::StaleReference { value, violation },
            other => other,
        }
    }

    /// The broken rule, when the error came from a validation strategy.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::InvalidValue { violation, .. } | Self::StaleReference { violation, .. } => {
                Some(violation)
            },
            Self::MissingInitialValue { .. } => None,
        }
    }

    /// Rendering of the offending value, when there is one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { value, .. } | Self::StaleReference { value, .. } => Some(value),
            Self::MissingInitialValue { .. } => None,
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidValue { .. } => ErrorCode::new("guarded", "invalid_value"),
            Self::MissingInitialValue { .. } => ErrorCode::new("guarded", "missing_initial_value"),
            Self::StaleReference { .. } => ErrorCode::new("guarded", "stale_reference"),
        }
    }

    const fn is_invariant(&self) -> bool {
        matches!(
            self,
            Self::MissingInitialValue { .. } | Self::StaleReference { .. }
        )
    }
}

impl From<DomainError> for ErrorEnvelope {
    fn from(error: DomainError) -> Self {
        let envelope = if error.is_invariant() {
            Self::invariant(error.error_code(), error.to_string())
        } else {
            Self::expected(error.error_code(), error.to_string())
        };

        match error {
            DomainError::InvalidValue { value, violation }
            | DomainError::StaleReference { value, violation } => {
                with_violation(envelope.with_metadata("value", value), violation)
            },
            DomainError::MissingInitialValue { type_name } => {
                envelope.with_metadata("type_name", type_name)
            },
        }
    }
}

fn with_violation(envelope: ErrorEnvelope, violation: Violation) -> ErrorEnvelope {
    match violation {
        Violation::BelowMinimum { min } => envelope.with_metadata("min", min),
        Violation::AboveMaximum { max } => envelope.with_metadata("max", max),
        Violation::OutOfRange { min, max } => {
            envelope.with_metadata("min", min).with_metadata("max", max)
        },
        Violation::TooLong { length, max_length } => envelope
            .with_metadata("length", length.to_string())
            .with_metadata("max_length", max_length.to_string()),
        Violation::TooLarge { size, max_size } => envelope
            .with_metadata("size", size.to_string())
            .with_metadata("max_size", max_size.to_string()),
        Violation::Empty => envelope,
        Violation::Rejected { reason } => envelope.with_metadata("reason", reason),
    }
}
