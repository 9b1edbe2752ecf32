//! Default-value strategies used by no-argument construction.

use crate::{Constant, DomainError};
use std::marker::PhantomData;

/// Stateless supplier of the value used when a wrapper is built without one.
///
/// Evaluated once per default construction. The supplied value is not
/// required to pass validation; the wrapper's construction mode decides what
/// happens when it does not.
pub trait Initial<T> {
    /// Produce the initial value.
    fn initial() -> Result<T, DomainError>;
}

/// No default exists; default construction fails with
/// [`DomainError::MissingInitialValue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoInitial;

/// Uses `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultInitial;

/// Uses the value of a [`Constant`] supplier.
pub struct Fixed<C>(PhantomData<fn() -> C>);

impl<T> Initial<T> for NoInitial {
    fn initial() -> Result<T, DomainError> {
        Err(DomainError::missing_initial::<T>())
    }
}

impl<T: Default> Initial<T> for DefaultInitial {
    fn initial() -> Result<T, DomainError> {
        Ok(T::default())
    }
}

impl<T, C: Constant<T>> Initial<T> for Fixed<C> {
    fn initial() -> Result<T, DomainError> {
        Ok(C::value())
    }
}
