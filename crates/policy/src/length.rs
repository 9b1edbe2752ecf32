//! Text strategies. Lengths are counted in characters, not bytes.

use crate::{DomainError, Validation, Violation};

/// Text must be at most `N` characters long.
pub struct MaxLength<const N: usize>;

/// Text must not be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonEmpty;

impl<T, const N: usize> Validation<T> for MaxLength<N>
where
    T: AsRef<str> + ?Sized,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        let text = candidate.as_ref();
        let length = text.chars().count();
        if length <= N {
            Ok(())
        } else {
            Err(DomainError::invalid(
                text,
                Violation::TooLong {
                    length,
                    max_length: N,
                },
            ))
        }
    }
}

impl<T> Validation<T> for NonEmpty
where
    T: AsRef<str> + ?Sized,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        let text = candidate.as_ref();
        if text.is_empty() {
            Err(DomainError::invalid(text, Violation::Empty))
        } else {
            Ok(())
        }
    }
}
