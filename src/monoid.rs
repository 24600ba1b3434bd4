//! Monoid trait for logs with an empty starting point
//!
//! A `Monoid` extends `Semigroup` with an identity element. Writers that
//! emit nothing carry `Monoid::empty()` as their log, and lifting a bare
//! value into a writer result starts from the same empty log.
//!
//! # Laws
//!
//! ```text
//! a.combine(M::empty()) == a           (right identity)
//! M::empty().combine(a) == a           (left identity)
//! ```
//!
//! # Counting instead of recording
//!
//! Any monoid works as a log. [`Sum`] turns a writer into a counter:
//!
//! ```
//! use tidemark::monoid::{fold_all, Sum};
//!
//! let total = fold_all(vec![Sum(1), Sum(2), Sum(3)]);
//! assert_eq!(total, Sum(6));
//! ```

use crate::Semigroup;
use std::ops::Add;

/// A `Semigroup` with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

macro_rules! impl_monoid_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(0 T1, 1 T2);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4);

/// Monoid for numeric types under addition.
///
/// Identity: `T::default()`.
///
/// # Example
///
/// ```
/// use tidemark::monoid::Sum;
/// use tidemark::Semigroup;
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Fold an iterator using the Monoid instance, starting with `empty()`.
///
/// # Example
///
/// ```
/// use tidemark::monoid::fold_all;
///
/// let logs = vec![vec!["a"], vec![], vec!["b", "c"]];
/// let joined: Vec<&str> = fold_all(logs);
/// assert_eq!(joined, vec!["a", "b", "c"]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
