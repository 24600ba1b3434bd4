//! Fault payloads for exception-bearing computations.
//!
//! A [`Fault`] is the failure a [`Fallible`](crate::kinds::Fallible) or
//! [`FallibleOption`](crate::kinds::FallibleOption) carries. Faults are
//! either raised explicitly or captured from a panic inside a guarded
//! region.
//!
//! # Examples
//!
//! ```
//! use tidemark::kinds::{Fault, FaultOrigin};
//!
//! let fault = Fault::new("connection refused");
//! assert_eq!(fault.message(), "connection refused");
//! assert_eq!(fault.origin(), FaultOrigin::Raised);
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Where a fault came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultOrigin {
    /// Returned or raised deliberately by user code.
    Raised,
    /// Captured from a panic inside a guarded region.
    Panic,
}

/// The failure payload of an exception-bearing computation.
///
/// # Raising from inside a bridge
///
/// Panicking with a `Fault` payload through [`std::panic::panic_any`]
/// preserves the fault verbatim when it is captured:
///
/// ```
/// use tidemark::kinds::{Fallible, Fault};
///
/// let boom = Fallible::<i32>::new(|| std::panic::panic_any(Fault::new("boom")));
/// assert_eq!(boom.force(), Err(Fault::new("boom")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    message: String,
    origin: FaultOrigin,
}

impl Fault {
    /// Create a raised fault.
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
            origin: FaultOrigin::Raised,
        }
    }

    /// Create a raised fault from any error, keeping its display text.
    pub fn from_error<E: StdError + ?Sized>(error: &E) -> Self {
        Fault::new(error.to_string())
    }

    /// Convert a captured panic payload into a fault.
    ///
    /// A `Fault` payload is returned unchanged; `&str` and `String`
    /// payloads become the message of a `Panic` fault.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Fault>() {
            Ok(fault) => return *fault,
            Err(other) => other,
        };

        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "panic with non-string payload".to_string()
        };

        Fault {
            message,
            origin: FaultOrigin::Panic,
        }
    }

    /// The fault message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the fault came from.
    pub fn origin(&self) -> FaultOrigin {
        self.origin
    }

    /// Returns `true` if the fault was captured from a panic.
    pub fn is_panic(&self) -> bool {
        self.origin == FaultOrigin::Panic
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            FaultOrigin::Raised => write!(f, "Fault: {}", self.message),
            FaultOrigin::Panic => write!(f, "Fault (panic): {}", self.message),
        }
    }
}

impl StdError for Fault {}

/// Run `f` in a guarded region, turning a panic into a [`Fault`].
pub(crate) fn guard<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Fault::from_panic)
}
