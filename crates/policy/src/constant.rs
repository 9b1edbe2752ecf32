//! Compile-time constant suppliers used for bounds and fixed defaults.

/// Supplies a constant value of type `T`.
///
/// Integer constants come from the const-generic suppliers below
/// (`I32<8>`, `U64<1024>`, ...). Anything else is declared with
/// [`constant!`](crate::constant).
pub trait Constant<T> {
    /// The supplied value.
    fn value() -> T;
}

macro_rules! int_constant {
    ($($(#[$meta:meta])* $name:ident($prim:ty) => [$($wide:ty),*];)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name<const N: $prim>;

        impl<const N: $prim> Constant<$prim> for $name<N> {
            fn value() -> $prim {
                N
            }
        }

        $(
            impl<const N: $prim> Constant<$wide> for $name<N> {
                fn value() -> $wide {
                    <$wide>::from(N)
                }
            }
        )*
    )*};
}

// Each supplier also converts losslessly into the listed wider types.
int_constant! {
    /// `i8` constant.
    I8(i8) => [i16, i32, i64, i128, isize, f32, f64];
    /// `i16` constant.
    I16(i16) => [i32, i64, i128, isize, f32, f64];
    /// `i32` constant.
    I32(i32) => [i64, i128, f64];
    /// `i64` constant.
    I64(i64) => [i128];
    /// `u8` constant.
    U8(u8) => [u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64];
    /// `u16` constant.
    U16(u16) => [u32, u64, u128, usize, i32, i64, i128, f32, f64];
    /// `u32` constant.
    U32(u32) => [u64, u128, i64, i128, f64];
    /// `u64` constant.
    U64(u64) => [u128, i128];
    /// `usize` constant.
    Usize(usize) => [];
}

/// Declare zero-sized [`Constant`] suppliers for arbitrary types.
///
/// ```
/// use guarded_policy::{Constant, constant};
///
/// constant! {
///     /// Upper bound of a percentage.
///     pub PercentMax: f64 = 1.0;
///     Greeting: String = "foo".to_owned();
/// }
///
/// assert_eq!(<PercentMax as Constant<f64>>::value(), 1.0);
/// assert_eq!(<Greeting as Constant<String>>::value(), "foo");
/// ```
#[macro_export]
macro_rules! constant {
    ($($(#[$meta:meta])* $vis:vis $name:ident: $ty:ty = $value:expr;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Constant<$ty> for $name {
            fn value() -> $ty {
                $value
            }
        }
    )*};
}
