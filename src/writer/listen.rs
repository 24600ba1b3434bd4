//! Listen combinator - expose the log alongside the value.

use crate::writer::{Outcome, Writer, WriterResult};

/// A writer whose value is paired with a copy of its log.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("logged").map(|_| 42).listen();
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&(42, vec!["logged"])));
/// assert_eq!(result.log(), &vec!["logged"]);
/// ```
#[derive(Clone)]
pub struct Listen<Wr> {
    pub(crate) inner: Wr,
}

impl<Wr> std::fmt::Debug for Listen<Wr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listen")
            .field("inner", &"<writer>")
            .finish()
    }
}

impl<Wr> Writer for Listen<Wr>
where
    Wr: Writer,
    Wr::Log: Clone,
{
    type Output = (Wr::Output, Wr::Log);
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        let (outcome, log) = self.inner.run_writer().into_parts();

        match outcome {
            Outcome::Value(value) => WriterResult::with_log((value, log.clone()), log),
            Outcome::Terminated => WriterResult::terminated_with(log),
        }
    }
}
