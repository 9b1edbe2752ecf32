//! Validation strategy contract and composition.

use crate::DomainError;

/// Stateless rule deciding whether a candidate value is acceptable.
///
/// Strategies are selected through a type parameter, so a check is a plain
/// static call with no receiver. Implementations must be deterministic:
/// the same candidate always gets the same verdict, and checking never
/// mutates anything.
///
/// ```
/// use guarded_policy::{DomainError, Validation, Violation};
///
/// struct Even;
///
/// impl Validation<i32> for Even {
///     fn check(candidate: &i32) -> Result<(), DomainError> {
///         if candidate % 2 == 0 {
///             Ok(())
///         } else {
///             Err(DomainError::invalid(candidate, Violation::rejected("must be even")))
///         }
///     }
/// }
///
/// assert!(Even::check(&4).is_ok());
/// assert!(Even::check(&5).is_err());
/// ```
pub trait Validation<T: ?Sized> {
    /// Accept or reject `candidate`.
    fn check(candidate: &T) -> Result<(), DomainError>;
}

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoValidation;

impl<T: ?Sized> Validation<T> for NoValidation {
    fn check(_candidate: &T) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Both strategies must accept; the first one is checked first.
impl<T, A, B> Validation<T> for (A, B)
where
    T: ?Sized,
    A: Validation<T>,
    B: Validation<T>,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        A::check(candidate)?;
        B::check(candidate)
    }
}
