//! # Tidemark
//!
//! > *"The water line shows where the tide has been"*
//!
//! Deferred, loggable computations for Rust.
//!
//! ## Philosophy
//!
//! A **writer** is a unit of work that produces a value and, on the way,
//! leaves a mark: an ordered log of everything it wants to report. Writers
//! are pure descriptions until run, can be run any number of times, and
//! compose into larger writers whose logs concatenate in call order.
//!
//! A writer can also bind into other kinds of computation (`Option`,
//! `Either`, `Result`, [`Fallible`](kinds::Fallible), `Vec`, maps,
//! [`State`](kinds::State), [`Reader`](kinds::Reader)) and keep its log
//! while taking on the other kind's success/failure shape.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidemark::prelude::*;
//!
//! let w = from_fn(|| WriterResult::with_log(5, vec!["start"]));
//!
//! let doubled = w.clone().map(|x| x * 2).run_writer();
//! assert_eq!(doubled.value(), Some(&10));
//! assert_eq!(doubled.log(), &vec!["start"]);
//!
//! let filtered = w.clone().filter(|x| *x > 10).run_writer();
//! assert!(filtered.is_terminated());
//! assert_eq!(filtered.log(), &vec!["start"]);
//!
//! let bridged = w.bind_into(|_| None::<i32>, |a, b| a + b).run_writer();
//! assert!(bridged.is_terminated());
//! assert_eq!(bridged.log(), &vec!["start"]);
//! ```
//!
//! ## Two error channels
//!
//! - **Writer termination** ([`Outcome::Terminated`]) is payload-free and
//!   sticky. It says "no value here" and nothing more.
//! - **Sibling failures** ([`Fault`](kinds::Fault), `Left`, `Err`, absence)
//!   belong to the sibling kind and are kept in its own representation,
//!   except where a bridge collapses them (see [`bridge`]).
//!
//! ## Cargo features
//!
//! - `tracing` - span instrumentation for writers and trace events when a
//!   bridge collapses a sibling failure
//! - `serde` - `Serialize`/`Deserialize` for [`Outcome`], [`WriterResult`]
//!   and [`Either`]
//! - `proptest` - strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bridge;
pub mod kinds;
pub mod monoid;
pub mod semigroup;
pub mod testing;
pub mod writer;

// Re-exports
pub use bridge::{BindInto, Rebind};
pub use kinds::{Either, Fault, Forceable};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use writer::{Outcome, Writer, WriterExt, WriterResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridge::Rebind;
    pub use crate::kinds::{
        Attempted, Either, Fallible, FallibleOption, Fault, Forceable, Reader, State, StateResult,
    };
    pub use crate::monoid::Monoid;
    pub use crate::semigroup::Semigroup;
    pub use crate::writer::prelude::*;
}
