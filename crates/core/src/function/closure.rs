use std::fmt;

use super::{Function, FunctionError};

type RealFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// A function given as a closure together with closures for its derivatives.
///
/// Derivatives are supplied in order: the first call to
/// [`with_derivative`](Self::with_derivative) provides `f'`, the second
/// `f''`, and so on. Requesting a higher order than was supplied is an error.
///
/// ```
/// use rootlab_core::{ClosureFn, Function};
///
/// let f = ClosureFn::new(|x| x.cos() - x)
///     .with_derivative(|x| -x.sin() - 1.0)
///     .with_derivative(|x| -x.cos());
///
/// assert_eq!(f.eval(0.0).unwrap(), 1.0);
/// assert_eq!(f.derivative(0.0, 2).unwrap(), -1.0);
/// assert!(f.derivative(0.0, 3).is_err());
/// ```
pub struct ClosureFn {
    f: RealFn,
    derivatives: Vec<RealFn>,
}

impl ClosureFn {
    /// Wraps `f` with no derivatives.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            f: Box::new(f),
            derivatives: Vec::new(),
        }
    }

    /// Appends the next derivative.
    #[must_use]
    pub fn with_derivative(mut self, df: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.derivatives.push(Box::new(df));
        self
    }

    /// Returns the highest derivative order available.
    #[must_use]
    pub fn max_order(&self) -> usize {
        self.derivatives.len()
    }
}

impl Function for ClosureFn {
    type Error = FunctionError;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x))
    }

    fn derivative(&self, x: f64, order: usize) -> Result<f64, Self::Error> {
        FunctionError::check_order(order)?;
        let df = self
            .derivatives
            .get(order - 1)
            .ok_or(FunctionError::UnsupportedOrder {
                order,
                available: self.derivatives.len(),
            })?;
        Ok(df(x))
    }
}

impl fmt::Debug for ClosureFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureFn")
            .field("max_order", &self.max_order())
            .finish_non_exhaustive()
    }
}
