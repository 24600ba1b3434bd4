//! Bridges from writers into sibling computation kinds.
//!
//! Rust has no higher-kinded types, so "bind a writer into any computation
//! kind" is written once, in [`BindInto`], against the [`Rebind`] adapter
//! trait. Each kind contributes a small `Rebind` impl saying how its own
//! failure signal is handled and how a value of the same kind carrying the
//! projected type is rebuilt.
//!
//! The algorithm is the same for every kind:
//!
//! 1. Run the writer. If it terminated, return a terminated writer with the
//!    same log without calling `bind`.
//! 2. Otherwise hand the value, `bind` and `project` to the kind's adapter.
//! 3. Attach whatever the adapter produced to the writer's log.
//!
//! | Kind | Sibling failure |
//! |------|-----------------|
//! | `Option` | `None` collapses into writer termination |
//! | `Either`, `Result` | `Left` / `Err` collapses into writer termination |
//! | `Fallible` | kept as the `Fallible`'s own fault |
//! | `FallibleOption` | kept as fault or absence |
//! | `Vec`, `BTreeMap`, `HashMap` | none; every element is projected |
//! | `State`, `Reader` | kept as the sibling's own termination |
//!
//! Collapsing loses the original cause (`Left` payload, error value). Bind
//! into `Fallible` when the cause matters.

mod collapse;
mod collection;
mod fallible;
mod stateful;

use std::marker::PhantomData;
use std::rc::Rc;

use crate::writer::{Outcome, Writer, WriterResult};

/// Adapter implemented by every computation kind a writer can bind into.
///
/// `Self` is the kind carrying the bound value (`M<U>`); [`Rebound<V>`]
/// is the same kind carrying the projected value (`M<V>`).
///
/// `rebind` returns `Outcome::Terminated` only for kinds whose failure
/// collapses into writer termination. Deferred kinds always return a
/// value: their failure surfaces later, when the sibling is forced.
///
/// [`Rebound<V>`]: Rebind::Rebound
pub trait Rebind: Sized {
    /// The success value this kind carries.
    type Value;

    /// The same kind carrying `V` instead of [`Self::Value`](Rebind::Value).
    type Rebound<V>;

    /// Bind `seed` into this kind and project the combined value.
    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Self::Rebound<V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static;
}

/// A writer of a sibling kind, built by binding a writer into that kind.
///
/// Created by [`WriterExt::bind_into`](crate::writer::WriterExt::bind_into).
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
///
/// let w = tell_one("loaded").map(|_| 2);
/// let fanned = w.bind_into(|n| vec![*n, n * 10], |n, m| n + m);
///
/// let result = fanned.run_writer();
/// assert_eq!(result.value(), Some(&vec![4, 22]));
/// assert_eq!(result.log(), &vec!["loaded"]);
/// ```
pub struct BindInto<Wr, B, P, M> {
    pub(crate) inner: Wr,
    pub(crate) bind: Rc<B>,
    pub(crate) project: Rc<P>,
    pub(crate) _phantom: PhantomData<fn() -> M>,
}

impl<Wr: Clone, B, P, M> Clone for BindInto<Wr, B, P, M> {
    fn clone(&self) -> Self {
        BindInto {
            inner: self.inner.clone(),
            bind: Rc::clone(&self.bind),
            project: Rc::clone(&self.project),
            _phantom: PhantomData,
        }
    }
}

impl<Wr, B, P, M> std::fmt::Debug for BindInto<Wr, B, P, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindInto")
            .field("inner", &"<writer>")
            .field("bind", &"<function>")
            .field("project", &"<function>")
            .finish()
    }
}

impl<Wr, B, P, M, V> Writer for BindInto<Wr, B, P, M>
where
    Wr: Writer,
    Wr::Output: Clone + 'static,
    M: Rebind,
    B: Fn(&Wr::Output) -> M + 'static,
    P: Fn(Wr::Output, M::Value) -> V + 'static,
    V: 'static,
{
    type Output = M::Rebound<V>;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        let (outcome, log) = self.inner.run_writer().into_parts();

        match outcome {
            Outcome::Value(seed) => {
                WriterResult::from_outcome(M::rebind(seed, &self.bind, &self.project), log)
            }
            Outcome::Terminated => WriterResult::terminated_with(log),
        }
    }
}

#[cfg(test)]
mod tests;
