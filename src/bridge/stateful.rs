//! State- and environment-dependent kinds.

use std::rc::Rc;

use crate::bridge::Rebind;
use crate::kinds::{Reader, State, StateResult};
use crate::writer::Outcome;

impl<S, U> Rebind for State<S, U>
where
    S: Clone + 'static,
{
    type Value = U;
    type Rebound<V> = State<S, V>;

    /// Produces a `State` that threads its input through the bound
    /// computation. A terminated sibling hands back the input state
    /// unchanged.
    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<State<S, V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let bind = Rc::clone(bind);
        let project = Rc::clone(project);

        Outcome::Value(State::new(move |state: S| {
            let (next, outcome) = bind(&seed).run(state.clone()).into_parts();
            match outcome {
                Outcome::Value(value) => StateResult::new(next, project(seed.clone(), value)),
                Outcome::Terminated => StateResult::terminated(state),
            }
        }))
    }
}

impl<Env, U> Rebind for Reader<Env, U> {
    type Value = U;
    type Rebound<V> = Reader<Env, V>;

    /// Produces a `Reader` that passes its environment to the bound
    /// computation. A terminated sibling yields a terminated read.
    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Reader<Env, V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let bind = Rc::clone(bind);
        let project = Rc::clone(project);

        Outcome::Value(Reader::new(move |env: &Env| {
            bind(&seed)
                .run(env)
                .map(|value| project(seed.clone(), value))
        }))
    }
}
