//! Container-size strategies.

use crate::{DomainError, Validation, Violation};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

/// Number of elements held by a container.
pub trait ElementCount {
    /// Current element count.
    fn element_count(&self) -> usize;
}

macro_rules! element_count {
    ($([$($generics:tt)*] $container:ty;)*) => {$(
        impl<$($generics)*> ElementCount for $container {
            fn element_count(&self) -> usize {
                self.len()
            }
        }
    )*};
}

element_count! {
    [E] [E];
    [E, const M: usize] [E; M];
    [E] Vec<E>;
    [E] VecDeque<E>;
    [E] BTreeSet<E>;
    [K, W] BTreeMap<K, W>;
    [E, S] HashSet<E, S>;
    [K, W, S] HashMap<K, W, S>;
}

/// Container must hold at most `N` elements.
///
/// ```
/// use guarded_policy::{MaxSize, Validation};
///
/// assert!(MaxSize::<3>::check(&vec![1, 2, 3]).is_ok());
/// assert!(MaxSize::<3>::check(&vec![1, 2, 3, 4]).is_err());
/// ```
pub struct MaxSize<const N: usize>;

impl<T, const N: usize> Validation<T> for MaxSize<N>
where
    T: ElementCount + Debug + ?Sized,
{
    fn check(candidate: &T) -> Result<(), DomainError> {
        let size = candidate.element_count();
        if size <= N {
            Ok(())
        } else {
            Err(DomainError::invalid(
                candidate,
                Violation::TooLarge { size, max_size: N },
            ))
        }
    }
}
