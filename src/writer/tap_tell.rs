//! TapTell combinator - append a value-derived entry after a successful run.

use crate::writer::{Outcome, Writer, WriterResult};
use crate::Semigroup;

/// A writer that appends an entry derived from the value.
///
/// Nothing is appended on a terminated run.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = pure::<_, Vec<String>>(42).tap_tell(|n| vec![format!("Result: {}", n)]);
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&42));
/// assert_eq!(result.log(), &vec!["Result: 42".to_string()]);
/// ```
#[derive(Clone)]
pub struct TapTell<Wr, F> {
    pub(crate) inner: Wr,
    pub(crate) f: F,
}

impl<Wr, F> std::fmt::Debug for TapTell<Wr, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapTell")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Wr, F, W2> Writer for TapTell<Wr, F>
where
    Wr: Writer,
    F: Fn(&Wr::Output) -> W2,
    W2: Into<Wr::Log>,
{
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        let (outcome, log) = self.inner.run_writer().into_parts();

        match outcome {
            Outcome::Value(value) => {
                let additional: Wr::Log = (self.f)(&value).into();
                WriterResult::with_log(value, log.combine(additional))
            }
            Outcome::Terminated => WriterResult::terminated_with(log),
        }
    }
}
