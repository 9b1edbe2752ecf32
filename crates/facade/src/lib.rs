//! # guarded
//!
//! Values that carry their own invariant.
//!
//! A [`Guarded<T, V, I>`](Guarded) holds a `T` that always satisfies the
//! validation strategy `V`; `I` supplies the value used by no-argument
//! construction. Arithmetic, bitwise and comparison operators forward to the
//! underlying value, and every operation that would change the value
//! re-validates the result first. [`GuardedRef`] does the same for a value
//! living in someone else's [`Cell`](std::cell::Cell), and [`GuardedRefCell`]
//! for a `Clone` value in a [`RefCell`](std::cell::RefCell).
//!
//! ```
//! use guarded::prelude::*;
//!
//! type SmallInt = Guarded<i32, Max<I32<32>>, Fixed<I32<8>>>;
//!
//! let mut value = SmallInt::try_default()?;
//! value.try_add_assign(16)?;
//! assert_eq!(value, 24);
//!
//! assert!(value.try_add_assign(16).is_err());
//! assert_eq!(value, 24);
//! # Ok::<(), guarded::DomainError>(())
//! ```
//!
//! Failures are [`DomainError`]s; convert them into the workspace
//! [`ErrorEnvelope`] when aggregating errors across layers.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use guarded_core::{
    Assign, ConstructionMode, Guarded, GuardedRef, GuardedRefCell, ModeParseError, Operand,
    core_crate_version,
};
pub use guarded_policy::{
    Constant, DefaultInitial, DomainError, ElementCount, Fixed, I8, I16, I32, I64, Initial, Max,
    MaxLength, MaxSize, Min, NoInitial, NoValidation, NonEmpty, Range, U8, U16, U32, U64, Usize,
    Validation, Violation, constant, policy_crate_version,
};
pub use guarded_shared::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};

/// Glob-importable set of the types and traits most callers need.
pub mod prelude {
    pub use crate::{
        Assign, Constant, ConstructionMode, DefaultInitial, DomainError, Fixed, Guarded,
        GuardedRef, GuardedRefCell, I8, I16, I32, I64, Initial, Max, MaxLength, MaxSize, Min,
        NoInitial, NoValidation, NonEmpty, Range, U8, U16, U32, U64, Usize, Validation, Violation,
        constant,
    };
}

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
