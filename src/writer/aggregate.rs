//! Single-value reductions over a writer.
//!
//! A writer yields at most one value, so every reduction here sees either
//! one value or none. On a terminated run the reduction is skipped and
//! termination propagates with the same log.

use crate::writer::{Writer, WriterResult};

macro_rules! writer_debug {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param),+> std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("inner", &"<writer>")
                    .finish_non_exhaustive()
            }
        }
    };
}

/// Folds the value into a seed.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = from_fn(|| WriterResult::with_log(5, vec!["start"])).fold(10, |acc, x| acc + x);
/// assert_eq!(w.run_writer().value(), Some(&15));
/// ```
#[derive(Clone)]
pub struct Fold<Wr, A, F> {
    pub(crate) inner: Wr,
    pub(crate) seed: A,
    pub(crate) f: F,
}

writer_debug!(Fold<Wr, A, F>);

impl<Wr, A, F> Writer for Fold<Wr, A, F>
where
    Wr: Writer,
    A: Clone,
    F: Fn(A, Wr::Output) -> A,
{
    type Output = A;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, A> {
        self.inner
            .run_writer()
            .map(|value| (self.f)(self.seed.clone(), value))
    }
}

/// Counts the value: `1` when present.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// assert_eq!(pure::<_, Vec<String>>("x").count().run_writer().value(), Some(&1));
/// ```
#[derive(Clone)]
pub struct Count<Wr> {
    pub(crate) inner: Wr,
}

writer_debug!(Count<Wr>);

impl<Wr: Writer> Writer for Count<Wr> {
    type Output = usize;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, usize> {
        self.inner.run_writer().map(|_| 1)
    }
}

/// Sums the value with the numeric `Sum` implementation of its type.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// assert_eq!(pure::<_, Vec<String>>(2.5_f64).sum().run_writer().value(), Some(&2.5));
/// ```
#[derive(Clone)]
pub struct SumValue<Wr> {
    pub(crate) inner: Wr,
}

writer_debug!(SumValue<Wr>);

impl<Wr> Writer for SumValue<Wr>
where
    Wr: Writer,
    Wr::Output: std::iter::Sum<Wr::Output>,
{
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        self.inner
            .run_writer()
            .map(|value| std::iter::once(value).sum())
    }
}

/// Tests the value against a predicate; `true` when it holds.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = pure::<_, Vec<String>>(4).for_all(|n| n % 2 == 0);
/// assert_eq!(w.run_writer().value(), Some(&true));
/// ```
#[derive(Clone)]
pub struct ForAll<Wr, P> {
    pub(crate) inner: Wr,
    pub(crate) predicate: P,
}

writer_debug!(ForAll<Wr, P>);

impl<Wr, P> Writer for ForAll<Wr, P>
where
    Wr: Writer,
    P: Fn(&Wr::Output) -> bool,
{
    type Output = bool;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, bool> {
        self.inner
            .run_writer()
            .map(|value| (self.predicate)(&value))
    }
}

/// Tests whether the value satisfies a predicate.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = pure::<_, Vec<String>>(3).exists(|n| *n > 5);
/// assert_eq!(w.run_writer().value(), Some(&false));
/// ```
#[derive(Clone)]
pub struct Exists<Wr, P> {
    pub(crate) inner: Wr,
    pub(crate) predicate: P,
}

writer_debug!(Exists<Wr, P>);

impl<Wr, P> Writer for Exists<Wr, P>
where
    Wr: Writer,
    P: Fn(&Wr::Output) -> bool,
{
    type Output = bool;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, bool> {
        self.inner
            .run_writer()
            .map(|value| (self.predicate)(&value))
    }
}
