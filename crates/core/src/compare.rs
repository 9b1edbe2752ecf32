//! Comparison pass-through: wrappers compare exactly like their underlying values.
//!
//! `wrapper == raw`, `raw == wrapper` and `wrapper == wrapper` (across
//! strategies) all delegate to the underlying type, as do the ordering
//! operators.

use crate::{Guarded, GuardedRef};
use std::cmp::Ordering;

impl<T, V, I, T2, V2, I2> PartialEq<Guarded<T2, V2, I2>> for Guarded<T, V, I>
where
    T: PartialEq<T2>,
{
    fn eq(&self, other: &Guarded<T2, V2, I2>) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq, V, I> Eq for Guarded<T, V, I> {}

impl<T, V, I, T2, V2, I2> PartialOrd<Guarded<T2, V2, I2>> for Guarded<T, V, I>
where
    T: PartialOrd<T2>,
{
    fn partial_cmp(&self, other: &Guarded<T2, V2, I2>) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: Ord, V, I> Ord for Guarded<T, V, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T, V, T2, V2> PartialEq<GuardedRef<'_, T2, V2>> for GuardedRef<'_, T, V>
where
    T: Copy + PartialEq<T2>,
    T2: Copy,
{
    fn eq(&self, other: &GuardedRef<'_, T2, V2>) -> bool {
        self.get() == other.get()
    }
}

impl<T, V, I, T2, V2> PartialEq<GuardedRef<'_, T2, V2>> for Guarded<T, V, I>
where
    T: PartialEq<T2>,
    T2: Copy,
{
    fn eq(&self, other: &GuardedRef<'_, T2, V2>) -> bool {
        *self.get() == other.get()
    }
}

impl<T, V, T2, V2, I2> PartialEq<Guarded<T2, V2, I2>> for GuardedRef<'_, T, V>
where
    T: Copy + PartialEq<T2>,
{
    fn eq(&self, other: &Guarded<T2, V2, I2>) -> bool {
        self.get() == *other.get()
    }
}

impl<T, V, T2, V2> PartialOrd<GuardedRef<'_, T2, V2>> for GuardedRef<'_, T, V>
where
    T: Copy + PartialOrd<T2>,
    T2: Copy,
{
    fn partial_cmp(&self, other: &GuardedRef<'_, T2, V2>) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

macro_rules! raw_compare {
    ($($raw:ty),*) => {$(
        impl<T, V, I> PartialEq<$raw> for Guarded<T, V, I>
        where
            T: PartialEq<$raw>,
        {
            fn eq(&self, other: &$raw) -> bool {
                self.get() == other
            }
        }

        impl<T, V, I> PartialEq<Guarded<T, V, I>> for $raw
        where
            $raw: PartialEq<T>,
        {
            fn eq(&self, other: &Guarded<T, V, I>) -> bool {
                self == other.get()
            }
        }

        impl<T, V, I> PartialOrd<$raw> for Guarded<T, V, I>
        where
            T: PartialOrd<$raw>,
        {
            fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
                self.get().partial_cmp(other)
            }
        }

        impl<T, V, I> PartialOrd<Guarded<T, V, I>> for $raw
        where
            $raw: PartialOrd<T>,
        {
            fn partial_cmp(&self, other: &Guarded<T, V, I>) -> Option<Ordering> {
                self.partial_cmp(other.get())
            }
        }

        impl<T, V> PartialEq<$raw> for GuardedRef<'_, T, V>
        where
            T: Copy + PartialEq<$raw>,
        {
            fn eq(&self, other: &$raw) -> bool {
                self.get() == *other
            }
        }

        impl<T, V> PartialEq<GuardedRef<'_, T, V>> for $raw
        where
            T: Copy,
            $raw: PartialEq<T>,
        {
            fn eq(&self, other: &GuardedRef<'_, T, V>) -> bool {
                *self == other.get()
            }
        }

        impl<T, V> PartialOrd<$raw> for GuardedRef<'_, T, V>
        where
            T: Copy + PartialOrd<$raw>,
        {
            fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
                self.get().partial_cmp(other)
            }
        }
    )*};
}

for_each_primitive!(raw_compare);

// Text: `Guarded<String, ..> == "foo"` and the reverse forms.
impl<T, V, I> PartialEq<str> for Guarded<T, V, I>
where
    T: PartialEq<str>,
{
    fn eq(&self, other: &str) -> bool {
        self.get() == other
    }
}

impl<'a, T, V, I> PartialEq<&'a str> for Guarded<T, V, I>
where
    T: PartialEq<&'a str>,
{
    fn eq(&self, other: &&'a str) -> bool {
        self.get() == other
    }
}

impl<T, V, I> PartialEq<String> for Guarded<T, V, I>
where
    T: PartialEq<String>,
{
    fn eq(&self, other: &String) -> bool {
        self.get() == other
    }
}

impl<T, V, I> PartialEq<Guarded<T, V, I>> for str
where
    str: PartialEq<T>,
{
    fn eq(&self, other: &Guarded<T, V, I>) -> bool {
        self == other.get()
    }
}

impl<T, V, I> PartialEq<Guarded<T, V, I>> for &str
where
    for<'a> &'a str: PartialEq<T>,
{
    fn eq(&self, other: &Guarded<T, V, I>) -> bool {
        self == other.get()
    }
}

impl<T, V, I> PartialEq<Guarded<T, V, I>> for String
where
    String: PartialEq<T>,
{
    fn eq(&self, other: &Guarded<T, V, I>) -> bool {
        self == other.get()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Guarded, GuardedRef};
    use guarded_policy::{DomainError, I32, Max, MaxLength, NoValidation};
    use std::cell::Cell;
    use std::collections::HashSet;

    type Small = Guarded<i32, Max<I32<32>>>;
    type Any = Guarded<i32, NoValidation>;
    type Text = Guarded<String, MaxLength<8>>;

    #[test]
    fn wrappers_compare_with_raw_values_both_ways() -> Result<(), DomainError> {
        let small = Small::new(17)?;
        assert!(small == 17);
        assert!(17 == small);
        assert!(small < 18);
        assert!(16 < small);
        assert!(small != 3);
        Ok(())
    }

    #[test]
    fn wrappers_compare_across_strategies() -> Result<(), DomainError> {
        let small = Small::new(17)?;
        let any = Any::new(17)?;
        let bigger = Any::new(100)?;
        assert!(small == any);
        assert!(small < bigger);
        assert_eq!(Small::new(3)?.max(Small::new(9)?), 9);
        Ok(())
    }

    #[test]
    fn text_wrappers_compare_with_strings() -> Result<(), DomainError> {
        let text = Text::new("foo".to_owned())?;
        assert!(text == "foo");
        assert!("foo" == text);
        assert!(text == String::from("foo"));
        assert!(String::from("foo") == text);
        assert!(*"foo" == text);
        Ok(())
    }

    #[test]
    fn hashing_matches_underlying_value() -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        seen.insert(Small::new(1)?);
        seen.insert(Small::new(1)?);
        seen.insert(Small::new(2)?);
        assert_eq!(seen.len(), 2);
        Ok(())
    }

    #[test]
    fn references_compare_with_owned_and_raw_values() -> Result<(), DomainError> {
        let slot = Cell::new(3.5_f64);
        let reference = GuardedRef::<f64, NoValidation>::new(&slot)?;
        let owned = Guarded::<f64, NoValidation>::new(3.5)?;
        assert!(reference == 3.5);
        assert!(3.5 == reference);
        assert!(reference == owned);
        assert!(owned == reference);
        assert!(reference < 4.0);
        Ok(())
    }
}
