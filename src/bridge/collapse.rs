//! Kinds whose failure collapses into writer termination.

use std::rc::Rc;

use crate::bridge::Rebind;
use crate::kinds::{Either, Forceable};
use crate::writer::Outcome;

/// Project the success value of an eager sibling, or collapse its failure.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn project_or_collapse<M, T, V, P>(sibling: M, seed: T, project: &P, kind: &'static str) -> Outcome<V>
where
    M: Forceable,
    P: Fn(T, M::Value) -> V,
{
    match sibling.success() {
        Some(value) => Outcome::Value(project(seed, value)),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(kind, "sibling failure collapsed into writer termination");
            Outcome::Terminated
        }
    }
}

impl<U> Rebind for Option<U> {
    type Value = U;
    type Rebound<V> = Option<V>;

    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Option<V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let sibling = bind(&seed);
        project_or_collapse(sibling, seed, project.as_ref(), "option").map(Some)
    }
}

impl<L, U> Rebind for Either<L, U> {
    type Value = U;
    type Rebound<V> = Either<L, V>;

    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Either<L, V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let sibling = bind(&seed);
        project_or_collapse(sibling, seed, project.as_ref(), "either").map(Either::Right)
    }
}

impl<U, E> Rebind for Result<U, E> {
    type Value = U;
    type Rebound<V> = Result<V, E>;

    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Result<V, E>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let sibling = bind(&seed);
        project_or_collapse(sibling, seed, project.as_ref(), "result").map(Ok)
    }
}
