//! Map combinator - transform the value of a writer.

use crate::writer::{Writer, WriterResult};

/// A writer that transforms the value of another writer.
///
/// The log passes through unchanged. On a terminated run the function is
/// never called and termination propagates with the same log.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = from_fn(|| WriterResult::with_log(5, vec!["start"])).map(|x| x * 2);
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&10));
/// assert_eq!(result.log(), &vec!["start"]);
/// ```
#[derive(Clone)]
pub struct Map<Wr, F> {
    pub(crate) inner: Wr,
    pub(crate) f: F,
}

impl<Wr, F> std::fmt::Debug for Map<Wr, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Wr, F, U> Writer for Map<Wr, F>
where
    Wr: Writer,
    F: Fn(Wr::Output) -> U,
{
    type Output = U;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, U> {
        self.inner.run_writer().map(&self.f)
    }
}
