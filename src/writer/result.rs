//! The record a writer produces when it runs.

use crate::Monoid;

/// Whether a computation produced a usable value.
///
/// `Terminated` is payload-free: it says "no value here" and nothing about
/// why. Filtering, upstream termination and collapsed sibling failures all
/// look the same once they reach this type.
///
/// # Example
///
/// ```rust
/// use tidemark::Outcome;
///
/// let found: Outcome<i32> = Some(3).into();
/// let missing: Outcome<i32> = None.into();
///
/// assert_eq!(found.map(|n| n + 1), Outcome::Value(4));
/// assert!(missing.is_terminated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T> {
    /// A usable value.
    Value(T),
    /// No usable value.
    Terminated,
}

impl<T> Outcome<T> {
    /// Returns `true` if this outcome carries a value.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// Returns `true` if this outcome is `Terminated`.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        matches!(self, Outcome::Terminated)
    }

    /// Borrow the value, if any.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Terminated => Outcome::Terminated,
        }
    }

    /// Transform the value. `f` is never called on `Terminated`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Terminated => Outcome::Terminated,
        }
    }

    /// Convert to `Option`, dropping the distinction between kinds of absence.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Terminated => None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Outcome::Value(value),
            None => Outcome::Terminated,
        }
    }
}

/// The value (or termination) of one writer run, together with its log.
///
/// The log is always present. A terminated result still carries every
/// entry accumulated before termination.
///
/// # Example
///
/// ```rust
/// use tidemark::WriterResult;
///
/// let done = WriterResult::with_log(5, vec!["start"]);
/// assert_eq!(done.value(), Some(&5));
///
/// let stopped = WriterResult::<_, i32>::terminated_with(vec!["start"]);
/// assert!(stopped.is_terminated());
/// assert_eq!(stopped.log(), &vec!["start"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterResult<W, T> {
    outcome: Outcome<T>,
    log: W,
}

impl<W: Monoid, T> WriterResult<W, T> {
    /// A non-terminated result with an empty log.
    pub fn new(value: T) -> Self {
        WriterResult {
            outcome: Outcome::Value(value),
            log: W::empty(),
        }
    }

    /// A terminated result with an empty log.
    pub fn terminated() -> Self {
        WriterResult {
            outcome: Outcome::Terminated,
            log: W::empty(),
        }
    }
}

impl<W, T> WriterResult<W, T> {
    /// A non-terminated result carrying `log`.
    pub fn with_log(value: T, log: W) -> Self {
        WriterResult {
            outcome: Outcome::Value(value),
            log,
        }
    }

    /// A terminated result carrying the log accumulated so far.
    pub fn terminated_with(log: W) -> Self {
        WriterResult {
            outcome: Outcome::Terminated,
            log,
        }
    }

    /// Build from an explicit `(value, log, terminated)` triple.
    ///
    /// When `terminated` is `true` the value is dropped.
    pub fn from_parts(value: T, log: W, terminated: bool) -> Self {
        if terminated {
            Self::terminated_with(log)
        } else {
            Self::with_log(value, log)
        }
    }

    /// Build from an outcome and a log.
    pub fn from_outcome(outcome: Outcome<T>, log: W) -> Self {
        WriterResult { outcome, log }
    }

    /// Returns `true` if no usable value was produced.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.outcome.is_terminated()
    }

    /// The value, or `None` when terminated.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Value(value) => Some(value),
            Outcome::Terminated => None,
        }
    }

    /// Consume the result, keeping only the value.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.outcome.into_option()
    }

    /// The accumulated log.
    #[inline]
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Consume the result, keeping only the log.
    #[inline]
    pub fn into_log(self) -> W {
        self.log
    }

    /// The outcome of the run.
    #[inline]
    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Split into outcome and log.
    #[inline]
    pub fn into_parts(self) -> (Outcome<T>, W) {
        (self.outcome, self.log)
    }

    /// Transform the value, leaving the log alone.
    ///
    /// `f` is never called on a terminated result.
    pub fn map<U, F>(self, f: F) -> WriterResult<W, U>
    where
        F: FnOnce(T) -> U,
    {
        WriterResult {
            outcome: self.outcome.map(f),
            log: self.log,
        }
    }

    /// Transform the log, leaving the outcome alone.
    pub fn map_log<W2, F>(self, f: F) -> WriterResult<W2, T>
    where
        F: FnOnce(W) -> W2,
    {
        WriterResult {
            outcome: self.outcome,
            log: f(self.log),
        }
    }
}

impl<W: Monoid, T> From<T> for WriterResult<W, T> {
    fn from(value: T) -> Self {
        WriterResult::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_value_lifts_with_empty_log() {
        let result: WriterResult<Vec<String>, i32> = 7.into();
        assert_eq!(result.value(), Some(&7));
        assert!(result.log().is_empty());
        assert!(!result.is_terminated());
    }

    #[test]
    fn test_from_parts_terminated_drops_value() {
        let result = WriterResult::from_parts(5, vec!["start"], true);
        assert!(result.is_terminated());
        assert_eq!(result.value(), None);
        assert_eq!(result.log(), &vec!["start"]);
    }

    #[test]
    fn test_from_parts_not_terminated() {
        let result = WriterResult::from_parts(5, vec!["start"], false);
        assert_eq!(result.into_value(), Some(5));
    }

    #[test]
    fn test_map_skips_terminated() {
        let result = WriterResult::<_, i32>::terminated_with(vec!["kept"]);
        let mapped = result.map(|_| -> i32 { panic!("must not run") });
        assert!(mapped.is_terminated());
        assert_eq!(mapped.into_log(), vec!["kept"]);
    }

    #[test]
    fn test_map_log_keeps_outcome() {
        let result = WriterResult::with_log(1, vec!["a", "b"]).map_log(|log| log.len());
        assert_eq!(result.into_parts(), (Outcome::Value(1), 2));
    }
}
