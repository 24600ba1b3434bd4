//! Testing utilities and helpers for writers
//!
//! Assertion macros for [`WriterResult`](crate::WriterResult)s, an
//! invocation counter for checking how often a computation actually runs,
//! and property-based testing strategies.
//!
//! # Examples
//!
//! ```rust
//! use tidemark::prelude::*;
//! use tidemark::{assert_log, assert_terminated, assert_value};
//!
//! let w = tell_one("start").map(|_| 5);
//!
//! assert_value!(w.run_writer(), 5);
//! assert_log!(w.run_writer(), vec!["start"]);
//! assert_terminated!(w.filter(|n| *n > 10).run_writer());
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// Counts invocations of a computation.
///
/// Clones share the same counter, so a clone can be moved into a closure
/// while the original is inspected afterwards.
///
/// # Example
///
/// ```rust
/// use tidemark::prelude::*;
/// use tidemark::testing::Probe;
///
/// let probe = Probe::new();
/// let hit = probe.clone();
/// let w = from_fn(move || {
///     hit.hit();
///     WriterResult::with_log(1, vec!["ran"])
/// });
///
/// w.run_writer();
/// w.run_writer();
/// assert_eq!(probe.count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Probe {
    hits: Rc<Cell<usize>>,
}

impl Probe {
    /// Create a probe with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// The number of recorded invocations.
    pub fn count(&self) -> usize {
        self.hits.get()
    }
}

/// Assert that a writer result carries the expected value.
///
/// # Example
///
/// ```rust
/// use tidemark::{assert_value, WriterResult};
///
/// let result = WriterResult::with_log(42, vec!["ok"]);
/// assert_value!(result, 42);
/// ```
#[macro_export]
macro_rules! assert_value {
    ($result:expr, $expected:expr) => {
        match $result.into_parts() {
            ($crate::Outcome::Value(value), _) => assert_eq!(value, $expected),
            ($crate::Outcome::Terminated, log) => {
                panic!("Expected a value, but the writer terminated with log {:?}", log)
            }
        }
    };
}

/// Assert that a writer result is terminated.
///
/// # Example
///
/// ```rust
/// use tidemark::{assert_terminated, WriterResult};
///
/// let result = WriterResult::<_, i32>::terminated_with(vec!["partial"]);
/// assert_terminated!(result);
/// ```
#[macro_export]
macro_rules! assert_terminated {
    ($result:expr) => {
        match $result.into_parts() {
            ($crate::Outcome::Terminated, _) => {}
            ($crate::Outcome::Value(value), _) => {
                panic!("Expected termination, but got value {:?}", value)
            }
        }
    };
}

/// Assert that a writer result carries the expected log.
///
/// # Example
///
/// ```rust
/// use tidemark::{assert_log, WriterResult};
///
/// let result = WriterResult::<_, i32>::terminated_with(vec!["partial"]);
/// assert_log!(result, vec!["partial"]);
/// ```
#[macro_export]
macro_rules! assert_log {
    ($result:expr, $expected:expr) => {
        assert_eq!($result.into_log(), $expected)
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy for writer results with a `Vec` log.
///
/// About one result in four is terminated.
///
/// # Example
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use tidemark::testing::arb_writer_result;
///
/// proptest! {
///     #[test]
///     fn log_survives_map(result in arb_writer_result(any::<i32>(), any::<u8>())) {
///         let log = result.log().clone();
///         prop_assert_eq!(result.map(|n| n as i64).into_log(), log);
///     }
/// }
/// ```
#[cfg(feature = "proptest")]
pub fn arb_writer_result<T, O>(
    value: impl Strategy<Value = T>,
    entry: impl Strategy<Value = O>,
) -> impl Strategy<Value = crate::WriterResult<Vec<O>, T>>
where
    T: std::fmt::Debug,
    O: std::fmt::Debug,
{
    (
        value,
        prop::collection::vec(entry, 0..8),
        prop::bool::weighted(0.25),
    )
        .prop_map(|(value, log, terminated)| crate::WriterResult::from_parts(value, log, terminated))
}
