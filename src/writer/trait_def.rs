//! Writer trait definition.

use std::rc::Rc;

use crate::writer::WriterResult;
use crate::Monoid;

/// A deferred computation that produces a value and accumulates a log.
///
/// Running a writer never memoizes: every call to [`run_writer`] executes
/// the computation again and rebuilds its log from scratch. Wrap a writer
/// with [`memoize`](crate::writer::WriterExt::memoize) when repeated runs
/// must observe a single execution.
///
/// # Laws
///
/// 1. **Identity**: `tell(W::empty())` behaves like `pure(())`
/// 2. **Homomorphism**: `tell(a).and_then(|_| tell(b))` logs `a.combine(b)`
/// 3. **Ordering**: logs accumulate left-to-right through chains
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("start").map(|_| 5);
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&5));
/// assert_eq!(result.log(), &vec!["start"]);
/// ```
///
/// [`run_writer`]: Writer::run_writer
pub trait Writer {
    /// The value produced on success.
    type Output;

    /// The type of values being accumulated.
    type Log: Monoid;

    /// Execute the computation and return its outcome with the accumulated log.
    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output>;
}

impl<Wr: Writer + ?Sized> Writer for &Wr {
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        (**self).run_writer()
    }
}

impl<Wr: Writer + ?Sized> Writer for Box<Wr> {
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        (**self).run_writer()
    }
}

impl<Wr: Writer + ?Sized> Writer for Rc<Wr> {
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        (**self).run_writer()
    }
}
