//! Semigroup trait for associative log concatenation
//!
//! Every writer log is combined with the log of the step that follows it.
//! `combine` must be associative so that chains of binds accumulate the same
//! log no matter how they are nested:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tidemark::Semigroup;
//!
//! let first = vec!["start".to_string()];
//! let second = vec!["done".to_string()];
//! assert_eq!(first.combine(second), vec!["start", "done"]);
//!
//! let t1 = (vec![1], "a".to_string());
//! let t2 = (vec![2], "b".to_string());
//! assert_eq!(t1.combine(t2), (vec![1, 2], "ab".to_string()));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both sides by value; clone first if you need to keep them.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_keeps_insertion_order() {
        let left = vec!["a", "b"];
        let right = vec!["c"];
        assert_eq!(left.combine(right), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_empty_sides() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.clone().combine(vec![1]), vec![1]);
        assert_eq!(vec![1].combine(empty), vec![1]);
    }

    #[test]
    fn test_string_concatenates() {
        assert_eq!("log:".to_string().combine("ok".to_string()), "log:ok");
    }

    #[test]
    fn test_tuple_combines_componentwise() {
        let t1 = (vec![1], "a".to_string(), ());
        let t2 = (vec![2], "b".to_string(), ());
        assert_eq!(t1.combine(t2), (vec![1, 2], "ab".to_string(), ()));
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
