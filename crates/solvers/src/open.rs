//! Open methods: iterate from one or two starting points.
//!
//! Open methods need no bracket and usually converge faster than bracketing
//! methods, but convergence is not guaranteed. Every run is bounded by the
//! iteration budget in [`Config`].
//!
//! # Solvers
//!
//! - [`fixed_point`] — iterates a user-supplied `g`
//! - [`newton`] — uses `f'`
//! - [`secant`] — approximates `f'` from the last two iterates
//! - [`multiple_roots`] — uses `f'` and `f''` to keep quadratic convergence
//!   at repeated roots

pub mod fixed_point;
pub mod multiple_roots;
pub mod newton;
pub mod secant;

pub use fixed_point::FixedPointStep;
pub use multiple_roots::MultipleRootStep;
pub use newton::NewtonStep;
pub use secant::SecantStep;

use rootlab_core::{ErrorMetric, Function, Relative};

use crate::{Config, Error, Solution};

/// Open methods bound to one function and one error metric.
///
/// The metric defaults to [`Relative`]; use
/// [`with_metric`](Self::with_metric) to pick another.
#[derive(Debug, Clone)]
pub struct OpenMethods<F, E = Relative> {
    function: F,
    metric: E,
}

impl<F: Function> OpenMethods<F> {
    /// Creates open methods for `function` using the relative error.
    pub fn new(function: F) -> Self {
        Self {
            function,
            metric: Relative,
        }
    }
}

impl<F: Function, E: ErrorMetric> OpenMethods<F, E> {
    /// Replaces the error metric.
    pub fn with_metric<M: ErrorMetric>(self, metric: M) -> OpenMethods<F, M> {
        OpenMethods {
            function: self.function,
            metric,
        }
    }

    /// Returns the function.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Returns the error metric.
    pub fn metric(&self) -> &E {
        &self.metric
    }

    /// Runs fixed-point iteration with `g` from `x0`.
    ///
    /// # Errors
    ///
    /// See [`fixed_point::solve`].
    pub fn fixed_point<G: Function>(
        &self,
        g: &G,
        x0: f64,
        config: &Config,
    ) -> Result<Solution<FixedPointStep>, Error> {
        fixed_point::solve_unobserved(&self.function, g, &self.metric, x0, config)
    }

    /// Runs Newton's method from `x0`.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton(&self, x0: f64, config: &Config) -> Result<Solution<NewtonStep>, Error> {
        newton::solve_unobserved(&self.function, &self.metric, x0, config)
    }

    /// Runs the secant method from `(x0, x1)`.
    ///
    /// # Errors
    ///
    /// See [`secant::solve`].
    pub fn secant(&self, x0: f64, x1: f64, config: &Config) -> Result<Solution<SecantStep>, Error> {
        secant::solve_unobserved(&self.function, &self.metric, x0, x1, config)
    }

    /// Runs multiple-root Newton from `x0`.
    ///
    /// # Errors
    ///
    /// See [`multiple_roots::solve`].
    pub fn multiple_roots(
        &self,
        x0: f64,
        config: &Config,
    ) -> Result<Solution<MultipleRootStep>, Error> {
        multiple_roots::solve_unobserved(&self.function, &self.metric, x0, config)
    }
}
