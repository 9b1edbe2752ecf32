//! Validated compound assignment.

use crate::guarded::Guarded;
use crate::operand::Operand;
use guarded_policy::{DomainError, Validation};
use std::ops;

macro_rules! compound_methods {
    ($($method:ident => $trait:ident::$raw:ident, $symbol:literal;)*) => {$(
        #[doc = concat!(
            "Compute `value ", $symbol, " rhs` on a scratch copy and commit it through [`assign`](Self::assign)."
        )]
        ///
        /// The visible value is unchanged when the result is rejected.
        fn $method<R>(&mut self, rhs: R) -> Result<(), DomainError>
        where
            R: Operand,
            Self::Value: ops::$trait<R::Raw>,
        {
            self.update(|value| ops::$trait::$raw(value, rhs.into_raw()))
        }
    )*};
}

/// Mutation through a single validated assignment.
///
/// Implementors provide a copy of the current value and a validated write;
/// every compound operation is derived from those two.
///
/// # Panics
///
/// The `try_*_assign` methods run the raw operator on the scratch copy, so
/// integer overflow (in debug builds), division or remainder by zero and
/// shift counts at or above the bit width panic exactly as the raw operator
/// does. Validation only sees results the operator actually produced.
pub trait Assign {
    /// The value being guarded.
    type Value;

    /// Replace the value with `candidate` if it passes validation.
    fn assign(&mut self, candidate: Self::Value) -> Result<(), DomainError>;

    /// A copy of the current value to compute a candidate from.
    fn scratch(&self) -> Self::Value;

    /// Apply `op` to a scratch copy, then commit the result.
    fn update<F>(&mut self, op: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut Self::Value),
    {
        let mut candidate = self.scratch();
        op(&mut candidate);
        self.assign(candidate)
    }

    compound_methods! {
        try_add_assign => AddAssign::add_assign, "+";
        try_sub_assign => SubAssign::sub_assign, "-";
        try_mul_assign => MulAssign::mul_assign, "*";
        try_div_assign => DivAssign::div_assign, "/";
        try_rem_assign => RemAssign::rem_assign, "%";
        try_bitand_assign => BitAndAssign::bitand_assign, "&";
        try_bitor_assign => BitOrAssign::bitor_assign, "|";
        try_bitxor_assign => BitXorAssign::bitxor_assign, "^";
        try_shl_assign => ShlAssign::shl_assign, "<<";
        try_shr_assign => ShrAssign::shr_assign, ">>";
    }
}

impl<T, V, I> Assign for Guarded<T, V, I>
where
    T: Clone,
    V: Validation<T>,
{
    type Value = T;

    fn assign(&mut self, candidate: T) -> Result<(), DomainError> {
        self.set(candidate)
    }

    fn scratch(&self) -> T {
        self.get().clone()
    }
}
