use rootlab_core::{ErrorMetric, Function};

use crate::Error;

/// Evaluates `f(x)`, boxing evaluator failures.
pub(crate) fn value<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    function.eval(x).map_err(|e| Error::Function(Box::new(e)))
}

/// Evaluates the `order`-th derivative at `x`, boxing evaluator failures.
pub(crate) fn derivative<F: Function>(function: &F, x: f64, order: usize) -> Result<f64, Error> {
    function
        .derivative(x, order)
        .map_err(|e| Error::Function(Box::new(e)))
}

/// Applies the metric and wraps the result as a defined trace entry.
pub(crate) fn error<E: ErrorMetric>(
    metric: &E,
    previous: f64,
    current: f64,
) -> Result<Option<f64>, Error> {
    Ok(Some(metric.error(previous, current)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootlab_core::{ClosureFn, MetricError, Relative};

    #[test]
    fn boxes_function_errors() {
        let f = ClosureFn::new(|x| x);
        assert!(matches!(derivative(&f, 1.0, 1), Err(Error::Function(_))));
        assert!(matches!(value(&f, 1.0), Ok(v) if v == 1.0));
    }

    #[test]
    fn metric_errors_are_numeric_faults() {
        let err = error(&Relative, 1.0, 0.0).unwrap_err();
        assert!(err.is_numeric_fault());
        assert!(matches!(
            err,
            Error::Metric(MetricError::DivisionByZero { .. })
        ));
    }
}
