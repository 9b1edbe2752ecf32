//! # guarded-core
//!
//! Validated-value wrappers.
//!
//! - [`Guarded`] owns a value and re-validates it on every mutation
//! - [`GuardedRef`] aliases caller-owned storage (a [`Cell`](std::cell::Cell))
//!   and validates writes made through it
//! - [`GuardedRefCell`] does the same for `Clone` values held in a
//!   [`RefCell`](std::cell::RefCell)
//! - [`Assign`] is the compound-assignment protocol: mutate a scratch copy,
//!   then commit it through a single validated assignment
//! - the operator impls in [`ops`] let wrappers take part in ordinary
//!   arithmetic and bitwise expressions
//!
//! ## Failure semantics
//!
//! A rejected candidate never becomes visible. Every mutating call returns
//! `Result<_, DomainError>` and leaves the wrapper untouched on `Err`.
//! Rust's `*Assign` operator traits cannot report failure, so the fallible
//! compound forms are the `try_*_assign` methods on [`Assign`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Primitive operand types: raw operators, comparisons and `Operand`.
macro_rules! for_each_primitive {
    ($mac:ident) => {
        $mac!(
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
        );
    };
}

pub mod assign;
pub mod compare;
pub mod guarded;
pub mod mode;
pub mod operand;
pub mod ops;
pub mod refcell;
pub mod reference;

pub use assign::Assign;
pub use guarded::Guarded;
pub use mode::{ConstructionMode, ModeParseError};
pub use operand::Operand;
pub use refcell::GuardedRefCell;
pub use reference::GuardedRef;

/// Returns the core crate version.
#[must_use]
pub const fn core_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
