use std::error::Error as StdError;

use rootlab_core::MetricError;
use thiserror::Error;

/// Errors that end a run without an outcome.
///
/// Invalid input is detected before the first iteration. Numeric faults
/// ([`Error::Metric`], [`Error::ZeroDenominator`] and
/// [`Error::NonFiniteValue`]) happen mid-run and discard the partial trace.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("error metric failed")]
    Metric(#[from] MetricError),

    #[error("update denominator vanished at x = {x} after {iters} iterations")]
    ZeroDenominator { x: f64, iters: usize },

    /// A bracketing method evaluated `f` to `NaN` or an infinity inside the
    /// bracket, so the sign of the midpoint is unknown.
    #[error("function value at x = {x} is not finite after {iters} iterations")]
    NonFiniteValue { x: f64, iters: usize },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Returns true for arithmetic faults raised during iteration.
    #[must_use]
    pub fn is_numeric_fault(&self) -> bool {
        matches!(
            self,
            Self::Metric(_) | Self::ZeroDenominator { .. } | Self::NonFiniteValue { .. }
        )
    }
}

/// Inputs rejected before any iteration runs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    /// The tolerance is negative, `NaN` or infinite.
    #[error("tolerance must be finite and non-negative, got {tolerance}")]
    Tolerance { tolerance: f64 },

    #[error("iteration budget must be at least 1, got {max_iters}")]
    MaxIters { max_iters: usize },

    #[error("search step must be finite and non-zero, got {delta}")]
    Step { delta: f64 },

    #[error("no sign change on [{lower}, {upper}]: f({lower}) = {f_lower}, f({upper}) = {f_upper}")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
}
