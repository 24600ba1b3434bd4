//! Convenient imports for writer computations.
//!
//! ```rust
//! use tidemark::writer::prelude::*;
//! ```

pub use crate::writer::{
    fold_writer, from_fn, pure, tell, tell_one, terminate, traverse_writer, BoxedWriter, Outcome,
    Writer, WriterExt, WriterResult,
};

#[cfg(feature = "tracing")]
pub use crate::writer::tracing::WriterTracingExt;
