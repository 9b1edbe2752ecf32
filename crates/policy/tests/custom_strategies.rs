//! Integration coverage for caller-defined strategies built on the policy traits.

use guarded_policy::{
    Constant, DomainError, Fixed, I32, Initial, MaxLength, NonEmpty, Range, Validation, Violation,
    constant,
};
use guarded_shared::{ErrorEnvelope, ErrorKind};
use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

/// Days since the Unix epoch; zero means "not a date".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Day(u64);

#[allow(dead_code, reason = "only used as a type parameter")]
struct MustBeDate;

impl Validation<Day> for MustBeDate {
    fn check(candidate: &Day) -> Result<(), DomainError> {
        if candidate.0 == 0 {
            Err(DomainError::invalid(
                candidate,
                Violation::rejected("date must be initialized"),
            ))
        } else {
            Ok(())
        }
    }
}

#[allow(dead_code, reason = "only used as a type parameter")]
struct Today;

impl Initial<Day> for Today {
    fn initial() -> Result<Day, DomainError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| DomainError::missing_initial::<Day>())?;
        Ok(Day(elapsed.as_secs() / 86_400))
    }
}

constant! {
    #[allow(dead_code, reason = "only used as a type parameter")]
    Greeting: String = "foo".to_owned();
}

#[test]
fn computed_default_passes_custom_validation() -> Result<(), DomainError> {
    let today = Today::initial()?;
    MustBeDate::check(&today)?;
    Ok(())
}

#[test]
fn type_default_fails_custom_validation() {
    let error = MustBeDate::check(&Day::default()).err();
    assert_eq!(
        error.as_ref().map(ToString::to_string).as_deref(),
        Some("invalid value Day(0): date must be initialized")
    );
}

#[test]
fn fixed_default_can_be_checked_against_the_same_rule() -> Result<(), DomainError> {
    let initial: String = <Fixed<Greeting> as Initial<String>>::initial()?;
    <(NonEmpty, MaxLength<8>)>::check(&initial)?;
    assert_eq!(initial, <Greeting as Constant<String>>::value());
    Ok(())
}

#[test]
fn rejected_values_map_into_expected_envelopes() -> Result<(), Box<dyn Error>> {
    let Some(envelope) = Range::<I32<0>, I32<10>>::check(&12.56_f64)
        .err()
        .map(ErrorEnvelope::from)
    else {
        return Err("12.56 is outside [0, 10]".into());
    };

    assert_eq!(envelope.kind, ErrorKind::Expected);
    assert_eq!(envelope.code.to_string(), "guarded:invalid_value");
    assert_eq!(envelope.metadata_value("value"), Some("12.56"));
    assert_eq!(envelope.metadata_value("min"), Some("0.0"));
    assert_eq!(envelope.metadata_value("max"), Some("10.0"));
    Ok(())
}
