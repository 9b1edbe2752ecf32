//! Right-hand operands that unwrap to a raw value.

use crate::Guarded;

/// A value usable on the right of a forwarded operator.
///
/// Raw values unwrap to themselves and wrappers unwrap to their underlying
/// value, so one operator impl covers both `wrapper ⊗ wrapper` and
/// `wrapper ⊗ raw`.
pub trait Operand {
    /// The unwrapped value the raw operator is applied to.
    type Raw;

    /// Unwrap.
    fn into_raw(self) -> Self::Raw;
}

macro_rules! raw_operand {
    ($($raw:ty),*) => {$(
        impl Operand for $raw {
            type Raw = Self;

            fn into_raw(self) -> Self {
                self
            }
        }
    )*};
}

for_each_primitive!(raw_operand);
raw_operand!(String);

impl<'a> Operand for &'a str {
    type Raw = &'a str;

    fn into_raw(self) -> Self::Raw {
        self
    }
}

impl<T, V, I> Operand for Guarded<T, V, I> {
    type Raw = T;

    fn into_raw(self) -> T {
        self.into_inner()
    }
}

impl<'a, T, V, I> Operand for &'a Guarded<T, V, I> {
    type Raw = &'a T;

    fn into_raw(self) -> Self::Raw {
        self.get()
    }
}
