//! Sibling computation kinds a writer can bind into.
//!
//! `Option`, `Result`, `Vec`, `BTreeMap` and `HashMap` come from the
//! standard library. This module supplies the rest:
//!
//! - [`Either`] - disjoint two-outcome value
//! - [`Fallible`] - deferred computation that may fault
//! - [`FallibleOption`] - deferred computation that may fault or produce nothing
//! - [`State`] - computation threading a state value
//! - [`Reader`] - computation reading an environment
//!
//! Each kind, once forced, exposes its failure signal and success value
//! through [`Forceable`].

mod either;
mod fallible;
mod fallible_option;
mod fault;
mod reader;
mod state;

pub use either::Either;
pub use fallible::Fallible;
pub use fallible_option::{Attempted, FallibleOption};
pub use fault::{Fault, FaultOrigin};
pub use reader::Reader;
pub use state::{State, StateResult};

pub(crate) use fault::guard;

use crate::writer::Outcome;

/// A forced sibling computation: readable for failure, and for its value.
///
/// Deferred kinds become `Forceable` once run: [`Fallible::force`] yields a
/// `Result`, [`FallibleOption::force`] an [`Attempted`], [`State::run`] a
/// [`StateResult`] and [`Reader::run`] an [`Outcome`]. Eager kinds are
/// `Forceable` as they are.
///
/// # Example
///
/// ```rust
/// use tidemark::kinds::{Either, Forceable};
///
/// let left: Either<&str, i32> = Either::left("cached");
/// assert!(left.is_failure());
/// assert_eq!(Some(4).success(), Some(4));
/// ```
pub trait Forceable {
    /// The success value.
    type Value;

    /// Returns `true` if there is no success value to read.
    fn is_failure(&self) -> bool;

    /// Extract the success value, or `None` on failure.
    fn success(self) -> Option<Self::Value>;
}

impl<T> Forceable for Option<T> {
    type Value = T;

    fn is_failure(&self) -> bool {
        self.is_none()
    }

    fn success(self) -> Option<T> {
        self
    }
}

impl<T, E> Forceable for Result<T, E> {
    type Value = T;

    fn is_failure(&self) -> bool {
        self.is_err()
    }

    fn success(self) -> Option<T> {
        self.ok()
    }
}

impl<L, R> Forceable for Either<L, R> {
    type Value = R;

    fn is_failure(&self) -> bool {
        self.is_left()
    }

    fn success(self) -> Option<R> {
        self.into_right()
    }
}

impl<T> Forceable for Outcome<T> {
    type Value = T;

    fn is_failure(&self) -> bool {
        self.is_terminated()
    }

    fn success(self) -> Option<T> {
        self.into_option()
    }
}

impl<T> Forceable for Attempted<T> {
    type Value = T;

    fn is_failure(&self) -> bool {
        !self.is_value()
    }

    fn success(self) -> Option<T> {
        match self {
            Attempted::Value(value) => Some(value),
            Attempted::Absent | Attempted::Fault(_) => None,
        }
    }
}

impl<S, T> Forceable for StateResult<S, T> {
    type Value = T;

    fn is_failure(&self) -> bool {
        self.is_terminated()
    }

    fn success(self) -> Option<T> {
        let (_state, outcome) = self.into_parts();
        outcome.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_signals() {
        assert!(None::<i32>.is_failure());
        assert!(Err::<i32, &str>("e").is_failure());
        assert!(Outcome::<i32>::Terminated.is_failure());
        assert!(Attempted::<i32>::Absent.is_failure());
        assert!(Attempted::<i32>::Fault(Fault::new("f")).is_failure());
        assert!(StateResult::<u8, i32>::terminated(0).is_failure());
        assert!(!Either::<(), i32>::right(1).is_failure());
    }

    #[test]
    fn test_success_values() {
        assert_eq!(Ok::<i32, ()>(1).success(), Some(1));
        assert_eq!(Attempted::Value(2).success(), Some(2));
        assert_eq!(StateResult::new("s", 3).success(), Some(3));
        assert_eq!(Outcome::Value(4).success(), Some(4));
    }
}
