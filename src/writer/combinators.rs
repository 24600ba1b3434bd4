//! Collection combinators for writers.

use crate::writer::boxed::BoxedWriter;
use crate::writer::{Outcome, Writer, WriterResult};
use crate::Monoid;

/// Run a writer for each item, collecting the values and all logs.
///
/// The first step that terminates terminates the whole traversal; its log
/// and every earlier log are kept.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = traverse_writer(vec![1, 2, 3], |n| {
///     tell_one(format!("Processing {}", n)).map(move |_| n * 10)
/// });
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&vec![10, 20, 30]));
/// assert_eq!(result.log(), &vec![
///     "Processing 1".to_string(),
///     "Processing 2".to_string(),
///     "Processing 3".to_string(),
/// ]);
/// ```
pub fn traverse_writer<T, U, W, F, Wr>(items: Vec<T>, f: F) -> BoxedWriter<W, Vec<U>>
where
    T: Clone + 'static,
    U: 'static,
    W: Monoid + 'static,
    F: Fn(T) -> Wr + 'static,
    Wr: Writer<Output = U, Log = W>,
{
    BoxedWriter::new(TraverseWriter { items, f })
}

struct TraverseWriter<T, F> {
    items: Vec<T>,
    f: F,
}

impl<T, U, W, F, Wr> Writer for TraverseWriter<T, F>
where
    T: Clone,
    W: Monoid,
    F: Fn(T) -> Wr,
    Wr: Writer<Output = U, Log = W>,
{
    type Output = Vec<U>;
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, Vec<U>> {
        let mut values = Vec::with_capacity(self.items.len());
        let mut all_writes = W::empty();

        for item in self.items.iter().cloned() {
            let (outcome, writes) = (self.f)(item).run_writer().into_parts();
            all_writes = all_writes.combine(writes);

            match outcome {
                Outcome::Value(value) => values.push(value),
                Outcome::Terminated => return WriterResult::terminated_with(all_writes),
            }
        }

        WriterResult::with_log(values, all_writes)
    }
}

/// Fold a collection with a writer step, accumulating every step's log.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = fold_writer(vec![1, 2, 3, 4], 0, |acc, n| {
///     tell_one(format!("Adding {} to {}", n, acc)).map(move |_| acc + n)
/// });
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&10));
/// assert_eq!(result.log().len(), 4);
/// ```
pub fn fold_writer<T, A, W, F, Wr>(items: Vec<T>, init: A, f: F) -> BoxedWriter<W, A>
where
    T: Clone + 'static,
    A: Clone + 'static,
    W: Monoid + 'static,
    F: Fn(A, T) -> Wr + 'static,
    Wr: Writer<Output = A, Log = W>,
{
    BoxedWriter::new(FoldWriter { items, init, f })
}

struct FoldWriter<T, A, F> {
    items: Vec<T>,
    init: A,
    f: F,
}

impl<T, A, W, F, Wr> Writer for FoldWriter<T, A, F>
where
    T: Clone,
    A: Clone,
    W: Monoid,
    F: Fn(A, T) -> Wr,
    Wr: Writer<Output = A, Log = W>,
{
    type Output = A;
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, A> {
        let mut accumulator = self.init.clone();
        let mut all_writes = W::empty();

        for item in self.items.iter().cloned() {
            let (outcome, writes) = (self.f)(accumulator, item).run_writer().into_parts();
            all_writes = all_writes.combine(writes);

            match outcome {
                Outcome::Value(value) => accumulator = value,
                Outcome::Terminated => return WriterResult::terminated_with(all_writes),
            }
        }

        WriterResult::with_log(accumulator, all_writes)
    }
}
