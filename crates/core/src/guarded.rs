//! The owned validated-value wrapper.

use crate::ConstructionMode;
use guarded_policy::{DefaultInitial, DomainError, Initial, Validation};
use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;

/// A value of type `T` that always satisfies the validation strategy `V`.
///
/// Every path that changes the visible value runs `V` on the candidate first
/// and leaves the wrapper untouched when the candidate is rejected. `I`
/// supplies the value for no-argument construction.
///
/// ```
/// use guarded_core::Guarded;
/// use guarded_policy::{I32, Range};
///
/// type Percent = Guarded<f64, Range<I32<0>, I32<1>>>;
///
/// let mut percent = Percent::try_default()?;
/// percent.set(0.5)?;
/// assert!(percent.set(2.0).is_err());
/// assert_eq!(percent, 0.5);
/// # Ok::<(), guarded_policy::DomainError>(())
/// ```
pub struct Guarded<T, V, I = DefaultInitial> {
    value: T,
    pending: bool,
    policy: PhantomData<fn() -> (V, I)>,
}

impl<T, V, I> Guarded<T, V, I> {
    const fn accepted(value: T) -> Self {
        Self {
            value,
            pending: false,
            policy: PhantomData,
        }
    }

    /// Borrow the underlying value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consume the wrapper and return the underlying value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// True when a deferred construction accepted a value that failed validation
    /// and nothing has replaced it since.
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Exchange values with another wrapper of the same type.
    ///
    /// Both values were accepted by the same strategy, so nothing is re-checked.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T, V, I> Guarded<T, V, I>
where
    V: Validation<T>,
{
    /// Wrap `value` after validating it.
    pub fn new(value: T) -> Result<Self, DomainError> {
        V::check(&value).inspect_err(log_rejected::<T>)?;
        Ok(Self::accepted(value))
    }

    /// Replace the value with `candidate` if it passes validation.
    ///
    /// On failure the current value is left exactly as it was.
    pub fn set(&mut self, candidate: T) -> Result<(), DomainError> {
        V::check(&candidate).inspect_err(log_rejected::<T>)?;
        self.value = candidate;
        self.pending = false;
        Ok(())
    }

    /// Like [`set`](Self::set), returning the previous value.
    pub fn replace(&mut self, candidate: T) -> Result<T, DomainError> {
        V::check(&candidate).inspect_err(log_rejected::<T>)?;
        self.pending = false;
        Ok(mem::replace(&mut self.value, candidate))
    }

    /// Re-run validation against the current value without changing it.
    pub fn validate(&self) -> Result<(), DomainError> {
        V::check(&self.value)
    }
}

impl<T, V, I> Guarded<T, V, I>
where
    V: Validation<T>,
    I: Initial<T>,
{
    /// Build from the default-value strategy, failing if the default is invalid.
    pub fn try_default() -> Result<Self, DomainError> {
        Self::with_mode(ConstructionMode::Strict)
    }

    /// Build from the default-value strategy using an explicit construction mode.
    ///
    /// A missing default fails in every mode.
    pub fn with_mode(mode: ConstructionMode) -> Result<Self, DomainError> {
        let value = I::initial()?;
        match V::check(&value) {
            Ok(()) => Ok(Self::accepted(value)),
            Err(error) if mode.defers_validation() => {
                tracing::warn!(
                    type_name = type_name::<T>(),
                    %error,
                    "accepted invalid initial value pending validation"
                );
                Ok(Self {
                    value,
                    pending: true,
                    policy: PhantomData,
                })
            },
            Err(error) => {
                log_rejected::<T>(&error);
                Err(error)
            },
        }
    }
}

pub(crate) fn log_rejected<T: ?Sized>(error: &DomainError) {
    tracing::debug!(type_name = type_name::<T>(), %error, "rejected candidate value");
}

impl<T: Clone, V, I> Clone for Guarded<T, V, I> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            pending: self.pending,
            policy: PhantomData,
        }
    }
}

impl<T: Copy, V, I> Copy for Guarded<T, V, I> {}

impl<T, V, I> Deref for Guarded<T, V, I> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T, V, I> AsRef<T> for Guarded<T, V, I> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug, V, I> fmt::Debug for Guarded<T, V, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Guarded").field(&self.value).finish()
    }
}

impl<T: fmt::Display, V, I> fmt::Display for Guarded<T, V, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, formatter)
    }
}

impl<T: Hash, V, I> Hash for Guarded<T, V, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
