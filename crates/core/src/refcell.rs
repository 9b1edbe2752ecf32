//! Validated access to caller-owned storage that is not `Copy`.

use crate::assign::Assign;
use crate::guarded::{Guarded, log_rejected};
use crate::operand::Operand;
use guarded_policy::{DomainError, Validation};
use std::any::type_name;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

/// A validated view over a [`RefCell`] owned by someone else.
///
/// The counterpart of [`GuardedRef`](crate::GuardedRef) for values that are
/// only `Clone`, such as `String` or `Vec`. Reads clone the current value,
/// writes validate the candidate before it replaces the cell's contents, and
/// no borrow is held between calls.
///
/// # Panics
///
/// Every access borrows the cell, so calling into the reference while the
/// caller holds a conflicting borrow panics the way [`RefCell`] does.
///
/// ```
/// use guarded_core::{Assign, GuardedRefCell};
/// use guarded_policy::MaxLength;
/// use std::cell::RefCell;
///
/// let storage = RefCell::new(String::from("foo"));
/// let mut reference = GuardedRefCell::<String, MaxLength<8>>::new(&storage)?;
///
/// reference.try_add_assign(" bar")?;
/// assert_eq!(*storage.borrow(), "foo bar");
///
/// assert!(reference.try_add_assign(" baz").is_err());
/// assert_eq!(*storage.borrow(), "foo bar");
/// # Ok::<(), guarded_policy::DomainError>(())
/// ```
pub struct GuardedRefCell<'a, T, V> {
    slot: &'a RefCell<T>,
    policy: PhantomData<fn() -> V>,
}

impl<'a, T, V> GuardedRefCell<'a, T, V> {
    /// The aliased cell.
    pub const fn slot(&self) -> &'a RefCell<T> {
        self.slot
    }

    /// Exchange the contents of both aliased cells without re-checking either.
    pub fn swap(&self, other: &Self) {
        if !ptr::eq(self.slot, other.slot) {
            self.slot.swap(other.slot);
        }
    }
}

impl<T: Clone, V> GuardedRefCell<'_, T, V> {
    /// Clone the aliased value, including any external modification.
    pub fn get(&self) -> T {
        self.slot.borrow().clone()
    }
}

impl<'a, T, V> GuardedRefCell<'a, T, V>
where
    T: Clone,
    V: Validation<T>,
{
    /// Alias `slot`, failing if its current value does not pass validation.
    pub fn new(slot: &'a RefCell<T>) -> Result<Self, DomainError> {
        V::check(&*slot.borrow()).inspect_err(log_rejected::<T>)?;
        Ok(Self {
            slot,
            policy: PhantomData,
        })
    }

    /// Write `candidate` to the cell if it passes validation.
    pub fn set(&self, candidate: T) -> Result<(), DomainError> {
        V::check(&candidate).inspect_err(log_rejected::<T>)?;
        *self.slot.borrow_mut() = candidate;
        Ok(())
    }

    /// Check whether the aliased value still satisfies the policy.
    pub fn validate(&self) -> Result<(), DomainError> {
        V::check(&*self.slot.borrow()).map_err(|error| {
            tracing::warn!(
                type_name = type_name::<T>(),
                %error,
                "aliased value no longer satisfies its policy"
            );
            error.into_stale()
        })
    }

    /// Clone the aliased value into an owned wrapper.
    pub fn to_guarded(&self) -> Result<Guarded<T, V>, DomainError> {
        Guarded::new(self.get())
    }
}

impl<T, V> Assign for GuardedRefCell<'_, T, V>
where
    T: Clone,
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

impl<T: Clone, V> Operand for GuardedRefCell<'_, T, V> {
    type Raw = T;

    fn into_raw(self) -> T {
        self.get()
    }
}

impl<T: Clone, V> Operand for &GuardedRefCell<'_, T, V> {
    type Raw = T;

    fn into_raw(self) -> T {
        self.get()
    }
}

impl<T, V, R> PartialEq<R> for GuardedRefCell<'_, T, V>
where
    T: PartialEq<R>,
{
    fn eq(&self, other: &R) -> bool {
        *self.slot.borrow() == *other
    }
}

impl<T, V> Clone for GuardedRefCell<'_, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for GuardedRefCell<'_, T, V> {}

impl<T: fmt::Debug, V> fmt::Debug for GuardedRefCell<'_, T, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("GuardedRefCell")
            .field(&*self.slot.borrow())
            .finish()
    }
}

impl<T: fmt::Display, V> fmt::Display for GuardedRefCell<'_, T, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.slot.borrow(), formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guarded_policy::{MaxLength, MaxSize};
    use proptest::prelude::*;

    type ShortText<'a> = GuardedRefCell<'a, String, MaxLength<8>>;
    type FewItems<'a> = GuardedRefCell<'a, Vec<u8>, MaxSize<3>>;

    #[test]
    fn construction_validates_the_aliased_value() {
        let valid = RefCell::new(String::from("foo"));
        assert!(ShortText::new(&valid).is_ok());

        let invalid = RefCell::new(String::from("long foo bar"));
        let error = ShortText::new(&invalid).err();
        assert!(matches!(error, Some(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn compound_appends_write_through() -> Result<(), DomainError> {
        let storage = RefCell::new(String::from("foo"));
        let mut reference = ShortText::new(&storage)?;

        reference.try_add_assign(" bar")?;
        assert_eq!(*storage.borrow(), "foo bar");
        assert_eq!(reference, "foo bar");

        let long = String::from("long ") + &reference.get();
        assert!(reference.set(long).is_err());
        assert!(reference.try_add_assign("!!").is_err());
        assert_eq!(*storage.borrow(), "foo bar");
        Ok(())
    }

    #[test]
    fn external_writes_are_visible_and_detected() -> Result<(), DomainError> {
        let storage = RefCell::new(String::from("foo"));
        let reference = ShortText::new(&storage)?;

        *storage.borrow_mut() = String::from("long foo bar");
        assert_eq!(reference.get(), "long foo bar");

        let error = reference.validate().err();
        assert!(matches!(error, Some(DomainError::StaleReference { .. })));
        assert!(reference.to_guarded().is_err());

        *storage.borrow_mut() = String::from("ok");
        reference.validate()?;
        Ok(())
    }

    #[test]
    fn container_updates_are_size_checked() -> Result<(), DomainError> {
        let storage = RefCell::new(vec![1_u8, 2]);
        let mut reference = FewItems::new(&storage)?;

        reference.update(|items| items.push(3))?;
        assert_eq!(*storage.borrow(), [1_u8, 2, 3]);

        assert!(reference.update(|items| items.push(4)).is_err());
        assert_eq!(*storage.borrow(), [1_u8, 2, 3]);
        Ok(())
    }

    #[test]
    fn swap_exchanges_cell_contents() -> Result<(), DomainError> {
        let left = RefCell::new(String::from("left"));
        let right = RefCell::new(String::from("right"));
        let first = ShortText::new(&left)?;
        let second = ShortText::new(&right)?;

        first.swap(&second);
        assert_eq!(*left.borrow(), "right");
        assert_eq!(*right.borrow(), "left");

        first.swap(&first);
        assert_eq!(*left.borrow(), "right");
        Ok(())
    }

    #[test]
    fn snapshot_is_independent_of_the_cell() -> Result<(), DomainError> {
        let storage = RefCell::new(String::from("foo"));
        let reference = ShortText::new(&storage)?;
        let owned = reference.to_guarded()?;

        reference.set(String::from("bar"))?;
        assert_eq!(owned, "foo");
        assert_eq!(reference.to_string(), "bar");
        assert_eq!(format!("{reference:?}"), "GuardedRefCell(\"bar\")");
        Ok(())
    }

    proptest! {
        #[test]
        fn rejected_writes_never_reach_the_cell(candidate in "[a-z]{0,12}") {
            let storage = RefCell::new(String::from("foo"));
            let reference = ShortText::new(&storage).map_err(|error| TestCaseError::fail(error.to_string()))?;
            let accepted = reference.set(candidate.clone()).is_ok();
            prop_assert_eq!(accepted, candidate.chars().count() <= 8);
            let expected = if accepted { candidate } else { String::from("foo") };
            prop_assert_eq!(&*storage.borrow(), &expected);
        }
    }
}
