//! Censor combinator - rewrite the accumulated log.

use crate::writer::{Writer, WriterResult};

/// A writer whose log is rewritten after every run.
///
/// The rewrite applies to terminated runs too, since their partial log is
/// still surfaced to the caller.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("debug: verbose")
///     .and_then(|_| tell_one("info: important"))
///     .censor(|log| log.into_iter().filter(|l| !l.starts_with("debug")).collect());
///
/// assert_eq!(w.run_writer().into_log(), vec!["info: important"]);
/// ```
#[derive(Clone)]
pub struct Censor<Wr, F> {
    pub(crate) inner: Wr,
    pub(crate) f: F,
}

impl<Wr, F> std::fmt::Debug for Censor<Wr, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Censor")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Wr, F> Writer for Censor<Wr, F>
where
    Wr: Writer,
    F: Fn(Wr::Log) -> Wr::Log,
{
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        self.inner.run_writer().map_log(&self.f)
    }
}
