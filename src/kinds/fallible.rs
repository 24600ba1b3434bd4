//! The exception-bearing computation.

use std::rc::Rc;

use crate::kinds::fault::{guard, Fault};

/// A deferred computation that either produces a value or a [`Fault`].
///
/// Forcing runs the computation inside a guarded region: a panic becomes a
/// `Fault` instead of unwinding into the caller. Like writers, a `Fallible`
/// is re-invocable and not memoized.
///
/// # Example
///
/// ```rust
/// use tidemark::kinds::{Fallible, Fault};
///
/// let ok = Fallible::succeed(3);
/// let failed = Fallible::<i32>::fail(Fault::new("no route"));
/// let panicked = Fallible::<i32>::new(|| panic!("index out of range"));
///
/// assert_eq!(ok.force(), Ok(3));
/// assert_eq!(failed.force(), Err(Fault::new("no route")));
/// assert!(panicked.force().unwrap_err().is_panic());
/// ```
pub struct Fallible<T> {
    thunk: Rc<dyn Fn() -> Result<T, Fault>>,
}

impl<T> Clone for Fallible<T> {
    fn clone(&self) -> Self {
        Fallible {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<T> std::fmt::Debug for Fallible<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fallible").finish_non_exhaustive()
    }
}

impl<T> Fallible<T> {
    /// Create from a closure that may return or raise a fault.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, Fault> + 'static,
    {
        Fallible { thunk: Rc::new(f) }
    }

    /// A computation that always succeeds with `value`.
    pub fn succeed(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Fallible::new(move || Ok(value.clone()))
    }

    /// A computation that always fails with `fault`.
    pub fn fail(fault: Fault) -> Self
    where
        T: 'static,
    {
        Fallible::new(move || Err(fault.clone()))
    }

    /// Run the computation to completion, capturing any panic as a fault.
    pub fn force(&self) -> Result<T, Fault> {
        guard(|| (self.thunk)()).and_then(|result| result)
    }
}
