//! Ordering-based strategies: minimum, maximum and inclusive range.
//!
//! Bounds are [`Constant`] suppliers, so `Range<I32<0>, I32<10>>` checks an
//! `f64` against `[0.0, 10.0]`. Values that do not compare with a bound
//! (`NaN`) are rejected.

use crate::{Constant, DomainError, Validation, Violation};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Value must be `>= Lo`.
pub struct Min<Lo>(PhantomData<fn() -> Lo>);

/// Value must be `<= Hi`.
pub struct Max<Hi>(PhantomData<fn() -> Hi>);

/// Value must be within `[Lo, Hi]`.
pub struct Range<Lo, Hi>(PhantomData<fn() -> (Lo, Hi)>);

impl<T, Lo> Validation<T> for Min<Lo>
where
    T: PartialOrd + Debug,
    Lo: Constant<T>,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        let min = Lo::value();
        if *candidate >= min {
            Ok(())
        } else {
            Err(DomainError::invalid(candidate, Violation::below_minimum(&min)))
        }
    }
}

impl<T, Hi> Validation<T> for Max<Hi>
where
    T: PartialOrd + Debug,
    Hi: Constant<T>,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        let max = Hi::value();
        if *candidate <= max {
            Ok(())
        } else {
            Err(DomainError::invalid(candidate, Violation::above_maximum(&max)))
        }
    }
}

impl<T, Lo, Hi> Validation<T> for Range<Lo, Hi>
where
    T: PartialOrd + Debug,
    Lo: Constant<T>,
    Hi: Constant<T>,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        let min = Lo::value();
        let max = Hi::value();
        let within = *candidate >= min && *candidate <= max;
        if within {
            Ok(())
        } else {
            Err(DomainError::invalid(
                candidate,
                Violation::out_of_range(&min, &max),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{I32, I64};
    use proptest::prelude::*;

    type Percent = Range<I32<0>, I32<1>>;

    #[test]
    fn min_rejects_smaller_values() {
        assert!(Min::<I32<3>>::check(&3_i32).is_ok());
        let error = Min::<I32<3>>::check(&2_i32).err();
        assert_eq!(
            error,
            Some(DomainError::InvalidValue {
                value: "2".into(),
                violation: Violation::BelowMinimum { min: "3".into() },
            })
        );
    }

    #[test]
    fn max_rejects_larger_values() {
        assert!(Max::<I32<32>>::check(&32_i32).is_ok());
        assert!(Max::<I32<32>>::check(&-128_i32).is_ok());
        let error = Max::<I32<32>>::check(&33_i32).err();
        assert_eq!(
            error.as_ref().and_then(DomainError::violation),
            Some(&Violation::AboveMaximum { max: "32".into() })
        );
    }

    #[test]
    fn range_reports_both_bounds() {
        assert!(Percent::check(&0.0_f64).is_ok());
        assert!(Percent::check(&1.0_f64).is_ok());

        let error = Percent::check(&2.0_f64).err();
        assert_eq!(
            error.as_ref().and_then(DomainError::violation),
            Some(&Violation::OutOfRange {
                min: "0.0".into(),
                max: "1.0".into(),
            })
        );
    }

    #[test]
    fn nan_is_rejected_by_every_bound() {
        assert!(Min::<I32<0>>::check(&f64::NAN).is_err());
        assert!(Max::<I32<0>>::check(&f64::NAN).is_err());
        assert!(Percent::check(&f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn range_agrees_with_inclusive_containment(value in -1_000i64..1_000) {
            let verdict = Range::<I64<{ -10 }>, I64<10>>::check(&value).is_ok();
            prop_assert_eq!(verdict, (-10..=10).contains(&value));
        }
    }
}
