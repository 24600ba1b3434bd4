//! The exception-bearing optional computation.

use std::rc::Rc;

use crate::kinds::fault::{guard, Fault};

/// The forced result of a [`FallibleOption`]: a value, absence, or a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempted<T> {
    /// A value was produced.
    Value(T),
    /// The computation ran cleanly and produced nothing.
    Absent,
    /// The computation failed.
    Fault(Fault),
}

impl<T> Attempted<T> {
    /// Returns `true` if a value was produced.
    pub fn is_value(&self) -> bool {
        matches!(self, Attempted::Value(_))
    }

    /// Returns `true` if the computation produced nothing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Attempted::Absent)
    }

    /// Returns `true` if the computation failed.
    pub fn is_fault(&self) -> bool {
        matches!(self, Attempted::Fault(_))
    }
}

impl<T> From<Result<Option<T>, Fault>> for Attempted<T> {
    fn from(result: Result<Option<T>, Fault>) -> Self {
        match result {
            Ok(Some(value)) => Attempted::Value(value),
            Ok(None) => Attempted::Absent,
            Err(fault) => Attempted::Fault(fault),
        }
    }
}

/// A deferred computation with three outcomes: value, absence or fault.
///
/// Forcing is guarded the same way as [`Fallible`](crate::kinds::Fallible).
///
/// # Example
///
/// ```rust
/// use tidemark::kinds::{Attempted, FallibleOption, Fault};
///
/// assert_eq!(FallibleOption::some(1).force(), Attempted::Value(1));
/// assert_eq!(FallibleOption::<i32>::none().force(), Attempted::Absent);
/// assert_eq!(
///     FallibleOption::<i32>::fail(Fault::new("timeout")).force(),
///     Attempted::Fault(Fault::new("timeout"))
/// );
/// ```
pub struct FallibleOption<T> {
    thunk: Rc<dyn Fn() -> Attempted<T>>,
}

impl<T> Clone for FallibleOption<T> {
    fn clone(&self) -> Self {
        FallibleOption {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<T> std::fmt::Debug for FallibleOption<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallibleOption").finish_non_exhaustive()
    }
}

impl<T> FallibleOption<T> {
    /// Create from a closure producing an [`Attempted`].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Attempted<T> + 'static,
    {
        FallibleOption { thunk: Rc::new(f) }
    }

    /// A computation that always produces `value`.
    pub fn some(value: T) -> Self
    where
        T: Clone + 'static,
    {
        FallibleOption::new(move || Attempted::Value(value.clone()))
    }

    /// A computation that always produces nothing.
    pub fn none() -> Self
    where
        T: 'static,
    {
        FallibleOption::new(|| Attempted::Absent)
    }

    /// A computation that always fails with `fault`.
    pub fn fail(fault: Fault) -> Self
    where
        T: 'static,
    {
        FallibleOption::new(move || Attempted::Fault(fault.clone()))
    }

    /// Run the computation to completion, capturing any panic as a fault.
    pub fn force(&self) -> Attempted<T> {
        guard(|| (self.thunk)()).unwrap_or_else(Attempted::Fault)
    }
}
