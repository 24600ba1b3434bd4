//! Writer computations: deferred work that produces a value and a log.
//!
//! A writer is a re-invocable unit of work. Each run yields a
//! [`WriterResult`]: an [`Outcome`] (a value, or payload-free termination)
//! plus the log accumulated on the way. Logs are any [`Monoid`](crate::Monoid),
//! most often a `Vec` of entries.
//!
//! # Overview
//!
//! Instead of threading a log through every function:
//!
//! ```rust,ignore
//! fn process(x: i32, logs: &mut Vec<String>) -> Option<i32> {
//!     logs.push("Starting".into());
//!     let y = step1(x, logs)?;
//!     logs.push(format!("Step 1: {}", y));
//!     Some(y)
//! }
//! ```
//!
//! compose writers and let the combinators concatenate logs in call order:
//!
//! ```rust
//! use tidemark::prelude::*;
//!
//! let w = tell_one("Starting".to_string())
//!     .and_then(|_| pure(42))
//!     .tap_tell(|y| vec![format!("Step 1: {}", y)]);
//!
//! let result = w.run_writer();
//! assert_eq!(result.value(), Some(&42));
//! assert_eq!(result.log(), &vec!["Starting".to_string(), "Step 1: 42".to_string()]);
//! ```
//!
//! # Termination
//!
//! Termination is sticky and silent. Once a step terminates, every later
//! combinator passes the termination through without calling user code,
//! and the log accumulated so far is kept.
//!
//! ```rust
//! use tidemark::prelude::*;
//!
//! let w = tell_one("checked")
//!     .map(|_| 5)
//!     .filter(|x| *x > 10)
//!     .map(|x| x * 100);
//!
//! let result = w.run_writer();
//! assert!(result.is_terminated());
//! assert_eq!(result.log(), &vec!["checked"]);
//! ```
//!
//! # Module Structure
//!
//! - [`Writer`] - core trait
//! - [`WriterExt`] - combinator methods
//! - [`from_fn`], [`pure`], [`tell`], [`tell_one`], [`terminate`] - constructors
//! - [`traverse_writer`], [`fold_writer`] - collection combinators

mod aggregate;
mod and_then;
mod boxed;
mod censor;
mod combinators;
mod constructors;
mod ext;
mod filter;
mod for_each;
mod listen;
mod map;
mod memoize;
pub mod prelude;
mod result;
mod tap_tell;
mod trait_def;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use result::{Outcome, WriterResult};
pub use trait_def::Writer;

pub use ext::WriterExt;

pub use constructors::{from_fn, pure, tell, tell_one, terminate, FromFn, Pure, Tell, Terminate};

pub use aggregate::{Count, Exists, Fold, ForAll, SumValue};
pub use and_then::{AndThen, SelectMany};
pub use censor::Censor;
pub use filter::Filter;
pub use for_each::ForEach;
pub use listen::Listen;
pub use map::Map;
pub use memoize::Memoized;
pub use tap_tell::TapTell;

pub use boxed::BoxedWriter;

pub use combinators::{fold_writer, traverse_writer};
