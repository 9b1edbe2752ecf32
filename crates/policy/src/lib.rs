//! # guarded-policy
//!
//! Validation and default-value strategies for guarded values.
//!
//! Strategies are zero-sized types bound through generic parameters, so the
//! check a wrapper runs is decided at compile time:
//!
//! - [`Validation`] accepts or rejects a candidate value
//! - [`Initial`] supplies the value for no-argument construction
//! - [`Constant`] supplies compile-time bounds and fixed defaults
//!
//! Failures are reported as [`DomainError`], which converts into the shared
//! [`ErrorEnvelope`](guarded_shared::ErrorEnvelope).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod bounds;
pub mod constant;
pub mod error;
pub mod initial;
pub mod length;
pub mod size;
pub mod validation;

pub use bounds::{Max, Min, Range};
pub use constant::{Constant, I8, I16, I32, I64, U8, U16, U32, U64, Usize};
pub use error::{DomainError, Violation};
pub use initial::{DefaultInitial, Fixed, Initial, NoInitial};
pub use length::{MaxLength, NonEmpty};
pub use size::{ElementCount, MaxSize};
pub use validation::{NoValidation, Validation};

/// Returns the policy crate version.
#[must_use]
pub const fn policy_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
