//! Validated access to caller-owned storage.

use crate::assign::Assign;
use crate::guarded::{Guarded, log_rejected};
use crate::operand::Operand;
use guarded_policy::{DomainError, Validation};
use std::any::type_name;
use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;

/// A validated view over a [`Cell`] owned by someone else.
///
/// Writes made through the reference are validated before they reach the
/// cell. Writes made directly to the cell are not, so the aliased value may
/// drift out of policy; [`validate`](Self::validate) detects that.
///
/// ```
/// use guarded_core::GuardedRef;
/// use guarded_policy::{I32, Range};
/// use std::cell::Cell;
///
/// let storage = Cell::new(2.5_f64);
/// let reference = GuardedRef::<f64, Range<I32<0>, I32<10>>>::new(&storage)?;
///
/// assert!(reference.set(11.0).is_err());
/// assert_eq!(storage.get(), 2.5);
///
/// storage.set(100.0);
/// assert!(reference.validate().is_err());
/// # Ok::<(), guarded_policy::DomainError>(())
/// ```
pub struct GuardedRef<'a, T, V> {
    slot: &'a Cell<T>,
    policy: PhantomData<fn() -> V>,
}

impl<'a, T, V> GuardedRef<'a, T, V> {
    /// The aliased cell.
    pub const fn slot(&self) -> &'a Cell<T> {
        self.slot
    }

    /// Exchange the contents of both aliased cells without re-checking either.
    pub fn swap(&self, other: &Self) {
        self.slot.swap(other.slot);
    }
}

impl<T: Copy, V> GuardedRef<'_, T, V> {
    /// Read the aliased value, including any external modification.
    pub fn get(&self) -> T {
        self.slot.get()
    }
}

impl<'a, T, V> GuardedRef<'a, T, V>
where
    T: Copy,
    V: Validation<T>,
{
    /// Alias `slot`, failing if its current value does not pass validation.
    pub fn new(slot: &'a Cell<T>) -> Result<Self, DomainError> {
        V::check(&slot.get()).inspect_err(log_rejected::<T>)?;
        Ok(Self {
            slot,
            policy: PhantomData,
        })
    }

    /// Write `candidate` to the cell if it passes validation.
    pub fn set(&self, candidate: T) -> Result<(), DomainError> {
        V::check(&candidate).inspect_err(log_rejected::<T>)?;
        self.slot.set(candidate);
        Ok(())
    }

    /// Check whether the aliased value still satisfies the policy.
    pub fn validate(&self) -> Result<(), DomainError> {
        V::check(&self.get()).map_err(|error| {
            tracing::warn!(
                type_name = type_name::<T>(),
                %error,
                "aliased value no longer satisfies its policy"
            );
            error.into_stale()
        })
    }

    /// Copy the aliased value into an owned wrapper.
    pub fn to_guarded(&self) -> Result<Guarded<T, V>, DomainError> {
        Guarded::new(self.get())
    }
}

impl<T, V> Assign for GuardedRef<'_, T, V>
where
    T: Copy,
    V: Validation<T>,
{
    type Value = T;

    fn assign(&mut self, candidate: T) -> Result<(), DomainError> {
        self.set(candidate)
    }

    fn scratch(&self) -> T {
        self.get()
    }
}

impl<T: Copy, V> Operand for GuardedRef<'_, T, V> {
    type Raw = T;

    fn into_raw(self) -> T {
        self.get()
    }
}

impl<T: Copy, V> Operand for &GuardedRef<'_, T, V> {
    type Raw = T;

    fn into_raw(self) -> T {
        self.get()
    }
}

impl<T, V> Clone for GuardedRef<'_, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for GuardedRef<'_, T, V> {}

impl<T: Copy + fmt::Debug, V> fmt::Debug for GuardedRef<'_, T, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("GuardedRef").field(&self.get()).finish()
    }
}

impl<T: Copy + fmt::Display, V> fmt::Display for GuardedRef<'_, T, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guarded_policy::{I32, Range};
    use proptest::prelude::*;

    type Bounded<'a> = GuardedRef<'a, f64, Range<I32<0>, I32<10>>>;

    #[test]
    fn construction_validates_the_aliased_value() {
        let valid = Cell::new(2.5);
        assert!(Bounded::new(&valid).is_ok());

        let invalid = Cell::new(-1.0);
        let error = Bounded::new(&invalid).err();
        assert!(matches!(error, Some(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn writes_through_the_reference_are_validated() -> Result<(), DomainError> {
        let storage = Cell::new(2.5);
        let reference = Bounded::new(&storage)?;

        reference.set(7.5)?;
        assert_eq!(storage.get(), 7.5);

        assert!(reference.set(10.5).is_err());
        assert_eq!(storage.get(), 7.5);
        Ok(())
    }

    #[test]
    fn external_writes_are_visible_and_detected() -> Result<(), DomainError> {
        let storage = Cell::new(2.5);
        let reference = Bounded::new(&storage)?;

        storage.set(100.0);
        assert_eq!(reference.get(), 100.0);

        let error = reference.validate().err();
        assert!(matches!(error, Some(DomainError::StaleReference { .. })));

        storage.set(1.0);
        reference.validate()?;
        Ok(())
    }

    #[test]
    fn compound_assignment_writes_through() -> Result<(), DomainError> {
        let storage = Cell::new(2.0);
        let mut reference = Bounded::new(&storage)?;

        reference.try_mul_assign(4.0)?;
        assert_eq!(storage.get(), 8.0);

        assert!(reference.try_add_assign(3.0).is_err());
        assert_eq!(storage.get(), 8.0);
        Ok(())
    }

    #[test]
    fn swap_exchanges_cell_contents() -> Result<(), DomainError> {
        let left = Cell::new(1.0);
        let right = Cell::new(9.0);
        let first = Bounded::new(&left)?;
        let second = Bounded::new(&right)?;

        first.swap(&second);
        assert_eq!(left.get(), 9.0);
        assert_eq!(right.get(), 1.0);
        Ok(())
    }

    #[test]
    fn snapshot_into_owned_wrapper() -> Result<(), DomainError> {
        let storage = Cell::new(4.0);
        let reference = Bounded::new(&storage)?;
        let owned = reference.to_guarded()?;

        storage.set(5.0);
        assert_eq!(*owned, 4.0);

        storage.set(50.0);
        assert!(reference.to_guarded().is_err());
        Ok(())
    }

    #[test]
    fn formatting_reads_the_cell() -> Result<(), DomainError> {
        let storage = Cell::new(0.75);
        let reference = Bounded::new(&storage)?;
        assert_eq!(reference.to_string(), "0.75");
        assert_eq!(format!("{reference:?}"), "GuardedRef(0.75)");
        Ok(())
    }

    proptest! {
        #[test]
        fn rejected_writes_never_reach_the_cell(start in 0.0f64..=10.0, candidate in -20.0f64..20.0) {
            let storage = Cell::new(start);
            let reference = Bounded::new(&storage).map_err(|error| TestCaseError::fail(error.to_string()))?;
            let accepted = reference.set(candidate).is_ok();
            prop_assert_eq!(accepted, (0.0..=10.0).contains(&candidate));
            let expected = if accepted { candidate } else { start };
            prop_assert_eq!(storage.get(), expected);
        }
    }
}
