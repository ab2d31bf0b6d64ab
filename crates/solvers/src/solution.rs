use crate::{Outcome, Trace};

/// The result of a run: how it ended and every record it produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<R> {
    /// How the run terminated.
    pub outcome: Outcome,

    /// Records in iteration order.
    pub trace: Trace<R>,

    /// Iterations performed when the run finished.
    pub iters: usize,
}

impl<R> Solution<R> {
    /// Returns the root estimate carried by the outcome.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.outcome.root()
    }
}
