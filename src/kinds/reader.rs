//! The environment-reading computation.

use std::rc::Rc;

use crate::writer::Outcome;

/// A computation that reads an environment without changing it.
///
/// # Example
///
/// ```rust
/// use tidemark::kinds::Reader;
/// use tidemark::Outcome;
///
/// struct Config {
///     retries: u32,
/// }
///
/// let retries = Reader::asks(|config: &Config| config.retries);
/// assert_eq!(retries.run(&Config { retries: 3 }), Outcome::Value(3));
/// ```
pub struct Reader<Env, T> {
    read: Rc<dyn Fn(&Env) -> Outcome<T>>,
}

impl<Env, T> Clone for Reader<Env, T> {
    fn clone(&self) -> Self {
        Reader {
            read: Rc::clone(&self.read),
        }
    }
}

impl<Env, T> std::fmt::Debug for Reader<Env, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader").finish_non_exhaustive()
    }
}

impl<Env, T> Reader<Env, T> {
    /// Create from a function of the environment.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Env) -> Outcome<T> + 'static,
    {
        Reader { read: Rc::new(f) }
    }

    /// Ignore the environment and produce `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Reader::new(move |_| Outcome::Value(value.clone()))
    }

    /// Ignore the environment and produce nothing.
    pub fn terminated() -> Self
    where
        T: 'static,
    {
        Reader::new(|_| Outcome::Terminated)
    }

    /// Query a value from the environment.
    pub fn asks<F>(f: F) -> Self
    where
        F: Fn(&Env) -> T + 'static,
    {
        Reader::new(move |env| Outcome::Value(f(env)))
    }

    /// Run against `env`.
    pub fn run(&self, env: &Env) -> Outcome<T> {
        (self.read)(env)
    }
}

impl<Env> Reader<Env, Env>
where
    Env: Clone,
{
    /// Produce a clone of the whole environment.
    pub fn ask() -> Self {
        Reader::new(|env: &Env| Outcome::Value(env.clone()))
    }
}
