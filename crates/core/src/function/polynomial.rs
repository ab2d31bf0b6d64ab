use super::{Function, FunctionError};

/// A dense polynomial with exact derivatives of any order.
///
/// Coefficients are stored lowest degree first, so `[-2.0, 0.0, 1.0]` is
/// `x² − 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered lowest degree first.
    #[must_use]
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Returns the coefficients, lowest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree, or `None` for the empty polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluates the `order`-th derivative using Horner's scheme.
    ///
    /// Term `c_k x^k` contributes `c_k · k!/(k−order)! · x^(k−order)`.
    fn horner(&self, x: f64, order: usize) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(order)
            .rev()
            .fold(0.0, |acc, (k, &c)| {
                let falling: f64 = ((k - order + 1)..=k).map(|j| j as f64).product();
                acc * x + c * falling
            })
    }
}

impl Function for Polynomial {
    type Error = FunctionError;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self.horner(x, 0))
    }

    fn derivative(&self, x: f64, order: usize) -> Result<f64, Self::Error> {
        FunctionError::check_order(order)?;
        Ok(self.horner(x, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_with_horner() {
        // x³ − 2x − 5
        let p = Polynomial::new([-5.0, -2.0, 0.0, 1.0]);
        assert_relative_eq!(p.eval(2.0).unwrap(), -1.0);
        assert_relative_eq!(p.eval(3.0).unwrap(), 16.0);
        assert_eq!(p.degree(), Some(3));
    }

    #[test]
    fn derivatives_of_every_order() {
        // x³ − 2x − 5
        let p = Polynomial::new([-5.0, -2.0, 0.0, 1.0]);
        assert_relative_eq!(p.derivative(2.0, 1).unwrap(), 10.0);
        assert_relative_eq!(p.derivative(2.0, 2).unwrap(), 12.0);
        assert_relative_eq!(p.derivative(2.0, 3).unwrap(), 6.0);
        assert_relative_eq!(p.derivative(2.0, 4).unwrap(), 0.0);
    }

    #[test]
    fn rejects_order_zero() {
        let p = Polynomial::new([-2.0, 0.0, 1.0]);
        assert_eq!(
            p.derivative(1.0, 0),
            Err(FunctionError::InvalidOrder { order: 0 })
        );
    }

    #[test]
    fn empty_polynomial_is_zero() {
        let p = Polynomial::new(Vec::new());
        assert_eq!(p.degree(), None);
        assert_relative_eq!(p.eval(3.0).unwrap(), 0.0);
        assert_relative_eq!(p.derivative(3.0, 2).unwrap(), 0.0);
    }
}
