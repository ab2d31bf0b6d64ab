use thiserror::Error;

/// Measures the discrepancy between a previous and a current iterate.
///
/// Solvers are generic over the metric and never assume a particular one.
/// `NaN` stands for an undefined operand and must be rejected, never folded
/// into the result.
///
/// Closures with the signature `Fn(f64, f64) -> Result<f64, MetricError>`
/// implement this trait, so custom metrics need no new type.
pub trait ErrorMetric {
    /// Computes the error between `previous` and `current`.
    ///
    /// # Errors
    ///
    /// Returns a [`MetricError`] if an operand is undefined or the metric is
    /// not defined for the given values.
    fn error(&self, previous: f64, current: f64) -> Result<f64, MetricError>;
}

impl<F> ErrorMetric for F
where
    F: Fn(f64, f64) -> Result<f64, MetricError>,
{
    fn error(&self, previous: f64, current: f64) -> Result<f64, MetricError> {
        self(previous, current)
    }
}

/// Errors raised while computing an error metric.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MetricError {
    #[error("operands must be defined: previous = {previous}, current = {current}")]
    MissingOperand { previous: f64, current: f64 },

    #[error("relative error is undefined for a zero current value (previous = {previous})")]
    DivisionByZero { previous: f64 },
}

/// Absolute error `|previous − current|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absolute;

impl ErrorMetric for Absolute {
    fn error(&self, previous: f64, current: f64) -> Result<f64, MetricError> {
        require_defined(previous, current)?;
        Ok((previous - current).abs())
    }
}

/// Relative error `|previous − current| / |current|`.
///
/// This is the default metric of every solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relative;

impl ErrorMetric for Relative {
    fn error(&self, previous: f64, current: f64) -> Result<f64, MetricError> {
        #[allow(clippy::float_cmp)]
        if current == 0.0 {
            return Err(MetricError::DivisionByZero { previous });
        }
        require_defined(previous, current)?;
        Ok(((previous - current) / current).abs())
    }
}

fn require_defined(previous: f64, current: f64) -> Result<(), MetricError> {
    if previous.is_nan() || current.is_nan() {
        return Err(MetricError::MissingOperand { previous, current });
    }
    Ok(())
}
