//! Constructors for leaf writers.

use std::marker::PhantomData;

use crate::writer::{Writer, WriterResult};
use crate::Monoid;

/// A writer backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, W, T> Writer for FromFn<F>
where
    F: Fn() -> WriterResult<W, T>,
    W: Monoid,
{
    type Output = T;
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, T> {
        (self.f)()
    }
}

/// Create a writer from a closure returning a [`WriterResult`].
///
/// The closure runs on every invocation.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = from_fn(|| WriterResult::with_log(5, vec!["start"]));
///
/// assert_eq!(w.run_writer().value(), Some(&5));
/// assert_eq!(w.run_writer().log(), &vec!["start"]);
/// ```
pub fn from_fn<F, W, T>(f: F) -> FromFn<F>
where
    F: Fn() -> WriterResult<W, T>,
    W: Monoid,
{
    FromFn { f }
}

/// A writer that yields a fixed value and logs nothing.
///
/// Created by [`pure`].
#[derive(Debug, Clone)]
pub struct Pure<T, W> {
    value: T,
    _phantom: PhantomData<fn() -> W>,
}

impl<T, W> Writer for Pure<T, W>
where
    T: Clone,
    W: Monoid,
{
    type Output = T;
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, T> {
        WriterResult::new(self.value.clone())
    }
}

/// Lift a value into a writer with an empty log.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = pure::<_, Vec<String>>(42);
/// let result = w.run_writer();
///
/// assert_eq!(result.value(), Some(&42));
/// assert!(result.log().is_empty());
/// ```
pub fn pure<T, W>(value: T) -> Pure<T, W>
where
    T: Clone,
    W: Monoid,
{
    Pure {
        value,
        _phantom: PhantomData,
    }
}

/// A writer that only emits a log entry, producing unit.
///
/// Created by [`tell`] and [`tell_one`].
#[derive(Debug, Clone)]
pub struct Tell<W> {
    writes: W,
}

impl<W> Writer for Tell<W>
where
    W: Monoid + Clone,
{
    type Output = ();
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, ()> {
        WriterResult::with_log((), self.writes.clone())
    }
}

/// Emit a value to be accumulated.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
/// use tidemark::monoid::Sum;
///
/// let w = tell(Sum(1))
///     .and_then(|_| tell(Sum(1)))
///     .and_then(|_| tell(Sum(1)));
///
/// assert_eq!(w.run_writer().into_log(), Sum(3));
/// ```
pub fn tell<W>(w: W) -> Tell<W>
where
    W: Monoid + Clone,
{
    Tell { writes: w }
}

/// Emit a single item to a `Vec` log.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("hello".to_string());
/// assert_eq!(w.run_writer().into_log(), vec!["hello".to_string()]);
/// ```
pub fn tell_one<T>(item: T) -> Tell<Vec<T>>
where
    T: Clone,
{
    Tell { writes: vec![item] }
}

/// A writer that always terminates with an empty log.
///
/// Created by [`terminate`].
#[derive(Debug, Clone)]
pub struct Terminate<T, W> {
    _phantom: PhantomData<fn() -> (T, W)>,
}

impl<T, W> Writer for Terminate<T, W>
where
    W: Monoid,
{
    type Output = T;
    type Log = W;

    fn run_writer(&self) -> WriterResult<W, T> {
        WriterResult::terminated()
    }
}

/// A writer that produces no value.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("before").and_then(|_| terminate::<i32, _>());
/// let result = w.run_writer();
///
/// assert!(result.is_terminated());
/// assert_eq!(result.log(), &vec!["before"]);
/// ```
pub fn terminate<T, W>() -> Terminate<T, W>
where
    W: Monoid,
{
    Terminate {
        _phantom: PhantomData,
    }
}
