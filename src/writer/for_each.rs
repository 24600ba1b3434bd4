//! ForEach combinator - run an action on the value for its side effect.

use crate::writer::{Writer, WriterResult};

/// A unit-valued writer that hands the inner value to an action.
///
/// The action is skipped on a terminated run. Log and termination pass
/// through unchanged.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use tidemark::prelude::*;
///
/// let seen = RefCell::new(Vec::new());
/// let w = pure::<_, Vec<String>>(7).for_each(|n| seen.borrow_mut().push(n));
///
/// w.run_writer();
/// assert_eq!(*seen.borrow(), vec![7]);
/// ```
#[derive(Clone)]
pub struct ForEach<Wr, F> {
    pub(crate) inner: Wr,
    pub(crate) action: F,
}

impl<Wr, F> std::fmt::Debug for ForEach<Wr, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEach")
            .field("inner", &"<writer>")
            .field("action", &"<function>")
            .finish()
    }
}

impl<Wr, F> Writer for ForEach<Wr, F>
where
    Wr: Writer,
    F: Fn(Wr::Output),
{
    type Output = ();
    type Log = Wr::Log;

    fn run_writer(&self) -> WriterResult<Self::Log, ()> {
        self.inner.run_writer().map(&self.action)
    }
}
