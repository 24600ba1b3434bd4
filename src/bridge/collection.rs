//! Multi-valued and keyed kinds: no failure, every element is projected.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::rc::Rc;

use crate::bridge::Rebind;
use crate::writer::Outcome;

impl<U> Rebind for Vec<U> {
    type Value = U;
    type Rebound<V> = Vec<V>;

    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<Vec<V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let values = bind(&seed)
            .into_iter()
            .map(|value| project(seed.clone(), value))
            .collect();
        Outcome::Value(values)
    }
}

impl<K, U> Rebind for BTreeMap<K, U>
where
    K: Ord,
{
    type Value = U;
    type Rebound<V> = BTreeMap<K, V>;

    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<BTreeMap<K, V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let entries = bind(&seed)
            .into_iter()
            .map(|(key, value)| (key, project(seed.clone(), value)))
            .collect();
        Outcome::Value(entries)
    }
}

impl<K, U> Rebind for HashMap<K, U>
where
    K: Eq + Hash,
{
    type Value = U;
    type Rebound<V> = HashMap<K, V>;

    fn rebind<T, V, B, P>(seed: T, bind: &Rc<B>, project: &Rc<P>) -> Outcome<HashMap<K, V>>
    where
        T: Clone + 'static,
        V: 'static,
        B: Fn(&T) -> Self + 'static,
        P: Fn(T, Self::Value) -> V + 'static,
    {
        let entries = bind(&seed)
            .into_iter()
            .map(|(key, value)| (key, project(seed.clone(), value)))
            .collect();
        Outcome::Value(entries)
    }
}
