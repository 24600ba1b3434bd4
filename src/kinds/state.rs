//! The stateful computation.

use std::rc::Rc;

use crate::writer::Outcome;

/// The result of running a [`State`]: the next state and an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateResult<S, T> {
    state: S,
    outcome: Outcome<T>,
}

impl<S, T> StateResult<S, T> {
    /// A successful step.
    pub fn new(state: S, value: T) -> Self {
        StateResult {
            state,
            outcome: Outcome::Value(value),
        }
    }

    /// A step that produced no value.
    pub fn terminated(state: S) -> Self {
        StateResult {
            state,
            outcome: Outcome::Terminated,
        }
    }

    /// The state after the step.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The outcome of the step.
    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Returns `true` if the step produced no value.
    pub fn is_terminated(&self) -> bool {
        self.outcome.is_terminated()
    }

    /// Split into state and outcome.
    pub fn into_parts(self) -> (S, Outcome<T>) {
        (self.state, self.outcome)
    }
}

/// A computation that threads a state value through each run.
///
/// # Example
///
/// ```rust
/// use tidemark::kinds::State;
///
/// let next_id = State::new(|counter: u32| tidemark::kinds::StateResult::new(counter + 1, counter));
///
/// let (state, outcome) = next_id.run(7).into_parts();
/// assert_eq!(state, 8);
/// assert_eq!(outcome.into_option(), Some(7));
/// ```
pub struct State<S, T> {
    step: Rc<dyn Fn(S) -> StateResult<S, T>>,
}

impl<S, T> Clone for State<S, T> {
    fn clone(&self) -> Self {
        State {
            step: Rc::clone(&self.step),
        }
    }
}

impl<S, T> std::fmt::Debug for State<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

impl<S, T> State<S, T> {
    /// Create from a state transition.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S) -> StateResult<S, T> + 'static,
    {
        State { step: Rc::new(f) }
    }

    /// Leave the state alone and produce `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + 'static,
    {
        State::new(move |state| StateResult::new(state, value.clone()))
    }

    /// Leave the state alone and produce nothing.
    pub fn terminated() -> Self
    where
        S: 'static,
        T: 'static,
    {
        State::new(StateResult::terminated)
    }

    /// Run one step from `state`.
    pub fn run(&self, state: S) -> StateResult<S, T> {
        (self.step)(state)
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Produce the current state as the value.
    pub fn get() -> Self {
        State::new(|state: S| StateResult::new(state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: Clone + 'static,
{
    /// Replace the state.
    pub fn put(next: S) -> Self {
        State::new(move |_| StateResult::new(next.clone(), ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_reads_state() {
        let (state, outcome) = State::<i32, i32>::get().run(4).into_parts();
        assert_eq!(state, 4);
        assert_eq!(outcome, Outcome::Value(4));
    }

    #[test]
    fn test_put_replaces_state() {
        assert_eq!(State::put(9).run(1).state(), &9);
    }

    #[test]
    fn test_terminated_keeps_state() {
        let result = State::<&str, i32>::terminated().run("unchanged");
        assert!(result.is_terminated());
        assert_eq!(result.state(), &"unchanged");
    }
}
