//! Filter combinator - terminate when a predicate rejects the value.

use crate::writer::{Outcome, Writer, WriterResult};

/// A writer that terminates when its predicate rejects the value.
///
/// A rejected value leaves no marker behind: the result is terminated with
/// the original log, exactly like any other termination.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = from_fn(|| WriterResult::with_log(5, vec!["start"]));
///
/// let rejected = w.filter(|x| *x > 10).run_writer();
/// assert!(rejected.is_terminated());
/// assert_eq!(rejected.log(), &vec!["start"]);
/// ```
#[derive(Clone)]
pub struct Filter<Wr, P> {
    pub(crate) inner: Wr,
    pub(crate) predicate: P,
}

impl<Wr, P> std::fmt::Debug for Filter<Wr, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &"<writer>")
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<Wr, P> Writer for Filter<Wr, P>
where
    Wr: Writer,
    P: Fn(&Wr::Output) -> bool,
{
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        let (outcome, log) = self.inner.run_writer().into_parts();

        match outcome {
            Outcome::Value(value) if (self.predicate)(&value) => {
                WriterResult::with_log(value, log)
            }
            _ => WriterResult::terminated_with(log),
        }
    }
}
