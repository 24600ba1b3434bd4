//! BoxedWriter for type erasure.

use std::rc::Rc;

use crate::writer::{Writer, WriterResult};
use crate::Monoid;

/// A type-erased writer for collections, match arms and recursion.
///
/// Cloning is cheap: clones share the same underlying writer.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// fn step(verbose: bool) -> BoxedWriter<Vec<String>, i32> {
///     if verbose {
///         tell_one("enabled".to_string()).map(|_| 1).boxed()
///     } else {
///         pure(0).boxed()
///     }
/// }
///
/// let result = step(true).run_writer();
/// assert_eq!(result.value(), Some(&1));
/// assert_eq!(result.log(), &vec!["enabled".to_string()]);
/// ```
pub struct BoxedWriter<W, T> {
    inner: Rc<dyn Writer<Output = T, Log = W>>,
}

impl<W, T> Clone for BoxedWriter<W, T> {
    fn clone(&self) -> Self {
        BoxedWriter {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W, T> std::fmt::Debug for BoxedWriter<W, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedWriter").finish_non_exhaustive()
    }
}

impl<W, T> BoxedWriter<W, T>
where
    W: Monoid + 'static,
    T: 'static,
{
    /// Erase the concrete type of a writer.
    pub fn new<Wr>(writer: Wr) -> Self
    where
        Wr: Writer<Output = T, Log = W> + 'static,
    {
        BoxedWriter {
            inner: Rc::new(writer),
        }
    }
}

impl<W, T> Writer for BoxedWriter<W, T>
where
    W: Monoid,
{
    type Output = T;
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, T> {
        self.inner.run_writer()
    }
}
