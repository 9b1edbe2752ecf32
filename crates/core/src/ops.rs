//! Operator forwarding.
//!
//! A wrapper on the left applies the raw operator and re-validates the result
//! as a new wrapper of the left-hand type:
//!
//! ```
//! use guarded_core::Guarded;
//! use guarded_policy::{I32, Max};
//!
//! type Small = Guarded<i32, Max<I32<32>>>;
//!
//! let eight = Small::new(8)?;
//! assert_eq!((eight * 4)?, 32);
//! assert!((eight * 5).is_err());
//! assert_eq!(40_i32 - eight, 32);
//! # Ok::<(), guarded_policy::DomainError>(())
//! ```
//!
//! A raw value on the left gets the raw result back and nothing is validated.
//! Arithmetic operators are provided for every numeric primitive, bitwise
//! operators for integers and `bool`, shifts for integers.
//!
//! Overflow, division by zero and oversized shift counts behave exactly as
//! the raw operator does: in debug builds they panic before validation runs,
//! they are not reported as [`DomainError`].

use crate::guarded::Guarded;
use crate::operand::Operand;
use crate::reference::GuardedRef;
use guarded_policy::{DomainError, Validation};
use std::borrow::Borrow;
use std::ops;

macro_rules! forward_binary {
    ($($trait:ident::$method:ident;)*) => {$(
        impl<T, V, I, R> ops::$trait<R> for Guarded<T, V, I>
        where
            R: Operand,
            T: ops::$trait<R::Raw, Output = T>,
            V: Validation<T>,
        {
            type Output = Result<Self, DomainError>;

            fn $method(self, rhs: R) -> Self::Output {
                Self::new(ops::$trait::$method(self.into_inner(), rhs.into_raw()))
            }
        }

        impl<T, V, I, R> ops::$trait<R> for &Guarded<T, V, I>
        where
            R: Operand,
            T: Clone + ops::$trait<R::Raw, Output = T>,
            V: Validation<T>,
        {
            type Output = Result<Guarded<T, V, I>, DomainError>;

            fn $method(self, rhs: R) -> Self::Output {
                Guarded::new(ops::$trait::$method(self.get().clone(), rhs.into_raw()))
            }
        }
    )*};
}

forward_binary! {
    Add::add;
    Sub::sub;
    Mul::mul;
    Div::div;
    Rem::rem;
    BitAnd::bitand;
    BitOr::bitor;
    BitXor::bitxor;
    Shl::shl;
    Shr::shr;
}

macro_rules! forward_unary {
    ($($trait:ident::$method:ident;)*) => {$(
        impl<T, V, I> ops::$trait for Guarded<T, V, I>
        where
            T: ops::$trait<Output = T>,
            V: Validation<T>,
        {
            type Output = Result<Self, DomainError>;

            fn $method(self) -> Self::Output {
                Self::new(ops::$trait::$method(self.into_inner()))
            }
        }

        impl<T, V, I> ops::$trait for &Guarded<T, V, I>
        where
            T: Clone + ops::$trait<Output = T>,
            V: Validation<T>,
        {
            type Output = Result<Guarded<T, V, I>, DomainError>;

            fn $method(self) -> Self::Output {
                Guarded::new(ops::$trait::$method(self.get().clone()))
            }
        }
    )*};
}

forward_unary! {
    Neg::neg;
    Not::not;
}

macro_rules! raw_binary {
    ($raw:ty => $($trait:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {$(
        impl<V, I> ops::$trait<Guarded<$raw, V, I>> for $raw {
            type Output = $raw;

            fn $method(self, rhs: Guarded<$raw, V, I>) -> $raw {
                ops::$trait::$method(self, rhs.into_inner())
            }
        }

        impl<V, I> ops::$trait<&Guarded<$raw, V, I>> for $raw {
            type Output = $raw;

            fn $method(self, rhs: &Guarded<$raw, V, I>) -> $raw {
                ops::$trait::$method(self, *rhs.get())
            }
        }

        impl<V> ops::$trait<GuardedRef<'_, $raw, V>> for $raw {
            type Output = $raw;

            fn $method(self, rhs: GuardedRef<'_, $raw, V>) -> $raw {
                ops::$trait::$method(self, rhs.get())
            }
        }

        impl<V, I> ops::$assign<Guarded<$raw, V, I>> for $raw {
            fn $assign_method(&mut self, rhs: Guarded<$raw, V, I>) {
                ops::$assign::$assign_method(self, rhs.into_inner());
            }
        }

        impl<V, I> ops::$assign<&Guarded<$raw, V, I>> for $raw {
            fn $assign_method(&mut self, rhs: &Guarded<$raw, V, I>) {
                ops::$assign::$assign_method(self, *rhs.get());
            }
        }

        impl<V> ops::$assign<GuardedRef<'_, $raw, V>> for $raw {
            fn $assign_method(&mut self, rhs: GuardedRef<'_, $raw, V>) {
                ops::$assign::$assign_method(self, rhs.get());
            }
        }
    )*};
}

macro_rules! raw_arithmetic {
    ($($raw:ty),*) => {$(
        raw_binary! { $raw =>
            Add::add, AddAssign::add_assign;
            Sub::sub, SubAssign::sub_assign;
            Mul::mul, MulAssign::mul_assign;
            Div::div, DivAssign::div_assign;
            Rem::rem, RemAssign::rem_assign;
        }
    )*};
}

macro_rules! raw_bitwise {
    ($($raw:ty),*) => {$(
        raw_binary! { $raw =>
            BitAnd::bitand, BitAndAssign::bitand_assign;
            BitOr::bitor, BitOrAssign::bitor_assign;
            BitXor::bitxor, BitXorAssign::bitxor_assign;
        }
    )*};
}

macro_rules! raw_shifts {
    ($($raw:ty),*) => {$(
        raw_binary! { $raw =>
            Shl::shl, ShlAssign::shl_assign;
            Shr::shr, ShrAssign::shr_assign;
        }
    )*};
}

raw_arithmetic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
raw_bitwise!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool
);
raw_shifts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<V, I> Guarded<bool, V, I> {
    /// Logical AND with a raw or wrapped boolean.
    pub fn and<R>(&self, rhs: R) -> bool
    where
        R: Operand,
        R::Raw: Borrow<bool>,
    {
        let rhs = rhs.into_raw();
        *self.get() && *rhs.borrow()
    }

    /// Logical OR with a raw or wrapped boolean.
    pub fn or<R>(&self, rhs: R) -> bool
    where
        R: Operand,
        R::Raw: Borrow<bool>,
    {
        let rhs = rhs.into_raw();
        *self.get() || *rhs.borrow()
    }
}

impl<V, I> Guarded<bool, V, I>
where
    V: Validation<bool>,
{
    /// Logical AND assigned back through validation.
    pub fn try_and_assign<R>(&mut self, rhs: R) -> Result<(), DomainError>
    where
        R: Operand,
        R::Raw: Borrow<bool>,
    {
        let candidate = self.and(rhs);
        self.set(candidate)
    }

    /// Logical OR assigned back through validation.
    pub fn try_or_assign<R>(&mut self, rhs: R) -> Result<(), DomainError>
    where
        R: Operand,
        R::Raw: Borrow<bool>,
    {
        let candidate = self.or(rhs);
        self.set(candidate)
    }
}
