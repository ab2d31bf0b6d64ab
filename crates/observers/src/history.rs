use rootlab_core::Observer;

use crate::traits::HasError;

/// Collects the error column of a run and estimates its convergence order.
///
/// Undefined errors (the first rows of a trace) are skipped. With three
/// consecutive errors `e₀, e₁, e₂` the order is estimated as
///
/// ```text
/// p ≈ ln(e₂/e₁) / ln(e₁/e₀)
/// ```
///
/// which is close to 1 for bisection, about 1.6 for secant and 2 for Newton
/// near a simple root.
#[derive(Debug, Clone, Default)]
pub struct ErrorHistory {
    errors: Vec<f64>,
}

impl ErrorHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the defined errors in the order they were observed.
    #[must_use]
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Estimates the convergence order from the last three errors.
    ///
    /// Returns `None` unless the last three errors are positive and finite
    /// and give a finite estimate.
    #[must_use]
    pub fn order(&self) -> Option<f64> {
        let [e0, e1, e2] = *self.errors.last_chunk::<3>()?;
        if [e0, e1, e2].iter().any(|e| !(e.is_finite() && *e > 0.0)) {
            return None;
        }

        let p = (e2 / e1).ln() / (e1 / e0).ln();
        p.is_finite().then_some(p)
    }

    fn push(&mut self, error: Option<f64>) {
        if let Some(e) = error {
            self.errors.push(e);
        }
    }
}

impl<R: HasError> Observer<R> for ErrorHistory {
    fn observe(&mut self, record: &R) {
        self.push(record.error());
    }
}

impl<R: HasError> Observer<R> for &mut ErrorHistory {
    fn observe(&mut self, record: &R) {
        self.push(record.error());
    }
}
