//! Memoized combinator - run a writer at most once.

use std::cell::OnceCell;

use crate::writer::{Writer, WriterResult};

/// A writer that caches its first result.
///
/// Writers re-execute on every run by default. `Memoized` is the explicit
/// opt-in for callers that need one execution observed many times; later
/// runs return clones of the cached result.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use tidemark::prelude::*;
///
/// let calls = Cell::new(0);
/// let w = from_fn(|| {
///     calls.set(calls.get() + 1);
///     WriterResult::with_log(calls.get(), vec!["ran"])
/// })
/// .memoize();
///
/// assert_eq!(w.run_writer().value(), Some(&1));
/// assert_eq!(w.run_writer().value(), Some(&1));
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Memoized<Wr: Writer> {
    pub(crate) inner: Wr,
    pub(crate) cache: OnceCell<WriterResult<Wr::Log, Wr::Output>>,
}

impl<Wr: Writer> std::fmt::Debug for Memoized<Wr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("inner", &"<writer>")
            .field("cached", &self.cache.get().is_some())
            .finish()
    }
}

impl<Wr> Memoized<Wr>
where
    Wr: Writer,
{
    pub(crate) fn new(inner: Wr) -> Self {
        Memoized {
            inner,
            cache: OnceCell::new(),
        }
    }
}

impl<Wr> Writer for Memoized<Wr>
where
    Wr: Writer,
    Wr::Output: Clone,
    Wr::Log: Clone,
{
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        self.cache.get_or_init(|| self.inner.run_writer()).clone()
    }
}
