//! Extension trait providing combinator methods for all writers.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::bridge::{BindInto, Rebind};
use crate::writer::aggregate::{Count, Exists, Fold, ForAll, SumValue};
use crate::writer::and_then::{AndThen, SelectMany};
use crate::writer::boxed::BoxedWriter;
use crate::writer::censor::Censor;
use crate::writer::filter::Filter;
use crate::writer::for_each::ForEach;
use crate::writer::listen::Listen;
use crate::writer::map::Map;
use crate::writer::memoize::Memoized;
use crate::writer::tap_tell::TapTell;
use crate::writer::{Outcome, Writer};

/// Extension trait providing combinator methods for all writers.
///
/// Automatically implemented for every [`Writer`]; you never implement it
/// yourself. Every combinator returns a new writer and leaves running it to
/// the caller.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = from_fn(|| WriterResult::with_log(5, vec!["start".to_string()]))
///     .map(|x| x * 2)
///     .tap_tell(|n| vec![format!("doubled to {}", n)])
///     .filter(|n| *n > 5);
///
/// let result = w.run_writer();
/// assert_eq!(result.value(), Some(&10));
/// assert_eq!(result.log(), &vec!["start".to_string(), "doubled to 10".to_string()]);
/// ```
pub trait WriterExt: Writer {
    /// Transform the value.
    ///
    /// `f` is never invoked on a terminated run; termination and the log
    /// propagate unchanged.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }

    /// Chain a dependent writer, concatenating both logs in call order.
    ///
    /// `f` is not invoked when this writer terminates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::prelude::*;
    ///
    /// let w = tell_one("fetch").map(|_| 3).and_then(|n| tell_one("parse").map(move |_| n + 1));
    ///
    /// let result = w.run_writer();
    /// assert_eq!(result.value(), Some(&4));
    /// assert_eq!(result.log(), &vec!["fetch", "parse"]);
    /// ```
    fn and_then<Wr2, F>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        Wr2: Writer<Log = Self::Log>,
        F: Fn(Self::Output) -> Wr2,
    {
        AndThen { inner: self, f }
    }

    /// Bind into a second writer and project both values into one.
    ///
    /// When the second writer terminates, the result is terminated with
    /// both logs concatenated.
    fn select_many<Wr2, B, P, V>(self, bind: B, project: P) -> SelectMany<Self, B, P, Wr2>
    where
        Self: Sized,
        Wr2: Writer<Log = Self::Log>,
        B: Fn(&Self::Output) -> Wr2,
        P: Fn(Self::Output, Wr2::Output) -> V,
    {
        SelectMany {
            inner: self,
            bind,
            project,
            _phantom: PhantomData,
        }
    }

    /// Terminate when `predicate` rejects the value.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Filter {
            inner: self,
            predicate,
        }
    }

    /// Fold the value into `seed`.
    fn fold<A, F>(self, seed: A, f: F) -> Fold<Self, A, F>
    where
        Self: Sized,
        A: Clone,
        F: Fn(A, Self::Output) -> A,
    {
        Fold {
            inner: self,
            seed,
            f,
        }
    }

    /// Count the value: `1` on success.
    fn count(self) -> Count<Self>
    where
        Self: Sized,
    {
        Count { inner: self }
    }

    /// Sum the value with its numeric `Sum` implementation.
    fn sum(self) -> SumValue<Self>
    where
        Self: Sized,
        Self::Output: std::iter::Sum<Self::Output>,
    {
        SumValue { inner: self }
    }

    /// `true` when the value satisfies `predicate`.
    fn for_all<P>(self, predicate: P) -> ForAll<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        ForAll {
            inner: self,
            predicate,
        }
    }

    /// `true` when the value satisfies `predicate`.
    fn exists<P>(self, predicate: P) -> Exists<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Exists {
            inner: self,
            predicate,
        }
    }

    /// Hand the value to `action` for its side effect, producing unit.
    fn for_each<F>(self, action: F) -> ForEach<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output),
    {
        ForEach {
            inner: self,
            action,
        }
    }

    /// Run once and yield the value as a sequence of zero or one items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::prelude::*;
    ///
    /// let w = pure::<_, Vec<String>>(5);
    /// assert_eq!(w.values().collect::<Vec<_>>(), vec![5]);
    /// assert_eq!(w.filter(|_| false).values().count(), 0);
    /// ```
    fn values(&self) -> std::option::IntoIter<Self::Output> {
        self.run_writer().into_value().into_iter()
    }

    /// Append an entry derived from the value after a successful run.
    fn tap_tell<F, W2>(self, f: F) -> TapTell<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> W2,
        W2: Into<Self::Log>,
    {
        TapTell { inner: self, f }
    }

    /// Rewrite the accumulated log.
    fn censor<F>(self, f: F) -> Censor<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Log) -> Self::Log,
    {
        Censor { inner: self, f }
    }

    /// Pair the value with a copy of the log.
    fn listen(self) -> Listen<Self>
    where
        Self: Sized,
        Self::Log: Clone,
    {
        Listen { inner: self }
    }

    /// Cache the first result; later runs return clones of it.
    fn memoize(self) -> Memoized<Self>
    where
        Self: Sized,
        Self::Output: Clone,
        Self::Log: Clone,
    {
        Memoized::new(self)
    }

    /// Run and discard the log.
    fn run_ignore_log(&self) -> Outcome<Self::Output> {
        let (outcome, _log) = self.run_writer().into_parts();
        outcome
    }

    /// Erase the concrete writer type.
    fn boxed(self) -> BoxedWriter<Self::Log, Self::Output>
    where
        Self: Sized + 'static,
        Self::Output: 'static,
        Self::Log: 'static,
    {
        BoxedWriter::new(self)
    }

    /// Bind into a sibling computation kind, producing a writer of that kind.
    ///
    /// The log stays in the writer layer while the success/failure shape
    /// becomes the sibling's. See [`Rebind`] for the rule each kind follows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::prelude::*;
    ///
    /// let start = || from_fn(|| WriterResult::with_log(5, vec!["start"]));
    ///
    /// let present = start().bind_into(|x| Some(x + 1), |a, b| a + b).run_writer();
    /// assert_eq!(present.value(), Some(&Some(11)));
    ///
    /// let absent = start().bind_into(|_| None::<i32>, |a, b| a + b).run_writer();
    /// assert!(absent.is_terminated());
    /// assert_eq!(absent.log(), &vec!["start"]);
    /// ```
    fn bind_into<M, B, P, V>(self, bind: B, project: P) -> BindInto<Self, B, P, M>
    where
        Self: Sized,
        Self::Output: Clone + 'static,
        M: Rebind,
        B: Fn(&Self::Output) -> M + 'static,
        P: Fn(Self::Output, M::Value) -> V + 'static,
        V: 'static,
    {
        BindInto {
            inner: self,
            bind: Rc::new(bind),
            project: Rc::new(project),
            _phantom: PhantomData,
        }
    }

    /// Bind into a sibling computation kind, keeping the sibling's value.
    #[allow(clippy::type_complexity)]
    fn bind_into_value<M, B>(
        self,
        bind: B,
    ) -> BindInto<Self, B, fn(Self::Output, M::Value) -> M::Value, M>
    where
        Self: Sized,
        Self::Output: Clone + 'static,
        M: Rebind,
        M::Value: 'static,
        B: Fn(&Self::Output) -> M + 'static,
    {
        let keep: fn(Self::Output, M::Value) -> M::Value = keep_sibling_value;
        self.bind_into(bind, keep)
    }
}

fn keep_sibling_value<T, U>(_seed: T, value: U) -> U {
    value
}

impl<Wr: Writer> WriterExt for Wr {}
