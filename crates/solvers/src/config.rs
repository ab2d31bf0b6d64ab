use crate::InvalidInput;

/// Stopping criteria shared by the tolerance-driven methods.
///
/// A run stops once the error metric falls to `tolerance` or below, or
/// after `max_iters` iterations, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub tolerance: f64,
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a config. Values are checked when a solver starts.
    #[must_use]
    pub fn new(tolerance: f64, max_iters: usize) -> Self {
        Self {
            tolerance,
            max_iters,
        }
    }

    /// Validates the tolerance, then the iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or not finite, or if the
    /// iteration budget is zero.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(InvalidInput::Tolerance {
                tolerance: self.tolerance,
            });
        }
        validate_max_iters(self.max_iters)
    }

    /// Returns true while `error` still exceeds the tolerance.
    ///
    /// An undefined error (no previous iterate yet) never satisfies it.
    pub(crate) fn exceeds(&self, error: Option<f64>) -> bool {
        error.is_none_or(|e| e > self.tolerance)
    }

    /// Returns true if `error` is defined and within the tolerance.
    pub(crate) fn is_met(&self, error: Option<f64>) -> bool {
        error.is_some_and(|e| e <= self.tolerance)
    }
}

/// Rejects an empty iteration budget.
pub(crate) fn validate_max_iters(max_iters: usize) -> Result<(), InvalidInput> {
    if max_iters < 1 {
        return Err(InvalidInput::MaxIters { max_iters });
    }
    Ok(())
}
