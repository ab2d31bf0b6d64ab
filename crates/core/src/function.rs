mod closure;
mod polynomial;

pub use closure::ClosureFn;
pub use polynomial::Polynomial;

use thiserror::Error;

/// A real function of one variable that can be evaluated and differentiated.
///
/// Solvers only depend on this contract. Parsing expressions or computing
/// symbolic derivatives is left to the implementor.
///
/// Implementations used from several threads at once must be reentrant.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;

    /// Evaluates the derivative of the given `order` at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is zero or the derivative is unavailable.
    /// Implementations must never report an invalid order through a `NaN`.
    fn derivative(&self, x: f64, order: usize) -> Result<f64, Self::Error>;
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).eval(x)
    }

    fn derivative(&self, x: f64, order: usize) -> Result<f64, Self::Error> {
        (**self).derivative(x, order)
    }
}

/// Errors reported by the evaluators in this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FunctionError {
    #[error("{order} is not a valid derivative order, must be at least 1")]
    InvalidOrder { order: usize },

    #[error("derivative of order {order} is not available, highest supplied is {available}")]
    UnsupportedOrder { order: usize, available: usize },
}

impl FunctionError {
    /// Rejects a zero derivative order.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::InvalidOrder`] if `order` is zero.
    pub fn check_order(order: usize) -> Result<(), Self> {
        if order == 0 {
            return Err(Self::InvalidOrder { order });
        }
        Ok(())
    }
}
