//! Exception-bearing kinds: faults stay inside the sibling.

use std::rc::Rc;

use crate::bridge::Rebind;
use crate::kinds::{guard, Attempted, Fallible, FallibleOption};
use crate::writer::Outcome;

impl<U> Rebind for Fallible<U> {
    type Value = U;
    type Rebound<V> = Fallible<V>;

    /// Produces a deferred `Fallible`. Forcing it runs `bind`, forces the
    /// bound `Fallible` and runs `project`, each inside a guarded region.
    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Fallible<V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let bind = Rc::clone(bind);
        let project = Rc::clone(project);

        Outcome::Value(Fallible::new(move || {
            let value = guard(|| bind(&seed))?.force()?;
            guard(|| project(seed.clone(), value))
        }))
    }
}

impl<U> Rebind for FallibleOption<U> {
    type Value = U;
    type Rebound<V> = FallibleOption<V>;

    /// Produces a deferred `FallibleOption` keeping all three outcomes:
    /// fault, absence, or the projected value.
    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<FallibleOption<V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let bind = Rc::clone(bind);
        let project = Rc::clone(project);

        Outcome::Value(FallibleOption::new(move || {
            let sibling = match guard(|| bind(&seed)) {
                Ok(sibling) => sibling,
                Err(fault) => return Attempted::Fault(fault),
            };

            match sibling.force() {
                Attempted::Value(value) => match guard(|| project(seed.clone(), value)) {
                    Ok(projected) => Attempted::Value(projected),
                    Err(fault) => Attempted::Fault(fault),
                },
                Attempted::Absent => Attempted::Absent,
                Attempted::Fault(fault) => Attempted::Fault(fault),
            }
        }))
    }
}
