//! Sequential composition of writers.

use std::marker::PhantomData;

use crate::writer::{Outcome, Writer, WriterResult};
use crate::Semigroup;

/// Chains dependent writers, concatenating their logs.
///
/// If the first writer terminates, the function is not called and the
/// first log is returned as is. Otherwise the second writer's outcome is
/// returned with `log1.combine(log2)`, terminated or not.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("step 1")
///     .and_then(|_| tell_one("step 2"))
///     .and_then(|_| tell_one("step 3"));
///
/// assert_eq!(w.run_writer().into_log(), vec!["step 1", "step 2", "step 3"]);
/// ```
#[derive(Clone)]
pub struct AndThen<Wr, F> {
    pub(crate) inner: Wr,
    pub(crate) f: F,
}

impl<Wr, F> std::fmt::Debug for AndThen<Wr, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Wr, F, Wr2> Writer for AndThen<Wr, F>
where
    Wr: Writer,
    Wr2: Writer<Log = Wr::Log>,
    F: Fn(Wr::Output) -> Wr2,
{
    type Output = Wr2::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        let (outcome, log1) = self.inner.run_writer().into_parts();

        match outcome {
            Outcome::Value(value) => {
                let (outcome2, log2) = (self.f)(value).run_writer().into_parts();
                WriterResult::from_outcome(outcome2, log1.combine(log2))
            }
            Outcome::Terminated => WriterResult::terminated_with(log1),
        }
    }
}

/// Binds into a second writer and projects both values into one.
///
/// `bind` borrows the first value so that `project` can take ownership of
/// it afterwards. Logs always concatenate in call order, including when
/// the second writer terminates.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("a")
///     .map(|_| 2)
///     .select_many(
///         |n| {
///             let n = *n;
///             tell_one("b").map(move |_| n * 10)
///         },
///         |n, m| n + m,
///     );
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&22));
/// assert_eq!(result.log(), &vec!["a", "b"]);
/// ```
pub struct SelectMany<Wr, B, P, Wr2> {
    pub(crate) inner: Wr,
    pub(crate) bind: B,
    pub(crate) project: P,
    pub(crate) _phantom: PhantomData<fn() -> Wr2>,
}

impl<Wr, B, P, Wr2> std::fmt::Debug for SelectMany<Wr, B, P, Wr2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectMany")
            .field("inner", &"<writer>")
            .field("bind", &"<function>")
            .field("project", &"<function>")
            .finish()
    }
}

impl<Wr, B, P, Wr2, V> Writer for SelectMany<Wr, B, P, Wr2>
where
    Wr: Writer,
    Wr2: Writer<Log = Wr::Log>,
    B: Fn(&Wr::Output) -> Wr2,
    P: Fn(Wr::Output, Wr2::Output) -> V,
{
    type Output = V;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, V> {
        let (outcome, log1) = self.inner.run_writer().into_parts();

        let first = match outcome {
            Outcome::Value(value) => value,
            Outcome::Terminated => return WriterResult::terminated_with(log1),
        };

        let (outcome2, log2) = (self.bind)(&first).run_writer().into_parts();
        let log = log1.combine(log2);

        match outcome2 {
            Outcome::Value(second) => WriterResult::with_log((self.project)(first, second), log),
            Outcome::Terminated => WriterResult::terminated_with(log),
        }
    }
}
