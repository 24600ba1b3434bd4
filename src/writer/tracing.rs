//! Tracing support for writers.
//!
//! Provides the `Instrument` combinator and `instrument` method for running
//! writers inside tracing spans. Feature-gated behind `#[cfg(feature = "tracing")]`.

use crate::writer::{Writer, WriterResult};

/// A writer that runs inside a tracing span.
///
/// Created by [`WriterTracingExt::instrument`].
#[derive(Debug)]
pub struct Instrument<Wr> {
    pub(crate) inner: Wr,
    pub(crate) span: tracing::Span,
}

impl<Wr> Writer for Instrument<Wr>
where
    Wr: Writer,
{
    type Output = Wr::Output;
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, Self::Output> {
        let _entered = self.span.enter();
        let result = self.inner.run_writer();
        tracing::trace!(terminated = result.is_terminated(), "writer completed");
        result
    }
}

/// Extension trait for adding tracing instrumentation to writers.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait WriterTracingExt: Writer {
    /// Run this writer inside `span` on every invocation.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tidemark::prelude::*;
    /// use tidemark::writer::tracing::WriterTracingExt;
    /// use tracing::info_span;
    ///
    /// let w = tell_one("loading").map(|_| 42)
    ///     .instrument(info_span!("load_config"));
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self>
    where
        Self: Sized,
    {
        Instrument { inner: self, span }
    }
}

impl<Wr: Writer> WriterTracingExt for Wr {}
