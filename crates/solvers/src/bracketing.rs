//! Bracketing methods: locate a sign change, then shrink it.
//!
//! A bracketing method keeps two points whose function values have opposite
//! signs. For a continuous function the interval between them contains a
//! root, so convergence is guaranteed once a bracket is known.
//!
//! # Solvers
//!
//! - [`incremental`] — scans forward from a start point to find a bracket
//! - [`bisection`] — shrinks a bracket by bisection or false position
//!
//! [`BracketingMethods`] bundles a function with an error metric and exposes
//! all three methods.

pub mod bisection;
pub mod incremental;

pub use bisection::{BracketStep, Rule};
pub use incremental::SearchStep;

use rootlab_core::{ErrorMetric, Function, Relative};

use crate::{Config, Error, Solution};

/// Bracketing methods bound to one function and one error metric.
///
/// The metric defaults to [`Relative`]; use
/// [`with_metric`](Self::with_metric) to pick another.
#[derive(Debug, Clone)]
pub struct BracketingMethods<F, E = Relative> {
    function: F,
    metric: E,
}

impl<F: Function> BracketingMethods<F> {
    /// Creates bracketing methods for `function` using the relative error.
    pub fn new(function: F) -> Self {
        Self {
            function,
            metric: Relative,
        }
    }
}

impl<F: Function, E: ErrorMetric> BracketingMethods<F, E> {
    /// Replaces the error metric.
    pub fn with_metric<M: ErrorMetric>(self, metric: M) -> BracketingMethods<F, M> {
        BracketingMethods {
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

    /// Runs an incremental search from `x0`.
    ///
    /// # Errors
    ///
    /// See [`incremental::solve`].
    pub fn incremental_search(
        &self,
        x0: f64,
        delta: f64,
        max_iters: usize,
    ) -> Result<Solution<SearchStep>, Error> {
        incremental::solve_unobserved(&self.function, x0, delta, max_iters)
    }

    /// Runs bisection on `[xi, xs]`.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection(
        &self,
        xi: f64,
        xs: f64,
        config: &Config,
    ) -> Result<Solution<BracketStep>, Error> {
        self.bracket_search(xi, xs, config, Rule::Bisection)
    }

    /// Runs false position on `[xi, xs]`.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn false_position(
        &self,
        xi: f64,
        xs: f64,
        config: &Config,
    ) -> Result<Solution<BracketStep>, Error> {
        self.bracket_search(xi, xs, config, Rule::FalsePosition)
    }

    /// Shrinks `[xi, xs]` with the given rule.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bracket_search(
        &self,
        xi: f64,
        xs: f64,
        config: &Config,
        rule: Rule,
    ) -> Result<Solution<BracketStep>, Error> {
        bisection::solve_unobserved(&self.function, &self.metric, [xi, xs], config, rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootlab_core::{Absolute, ClosureFn};

    use crate::Outcome;

    #[test]
    fn search_then_bisect() {
        let methods = BracketingMethods::new(ClosureFn::new(|x: f64| x.cos() - x));

        let search = methods
            .incremental_search(0.0, 0.25, 20)
            .expect("should search");
        let Outcome::SignChange { lower, upper } = search.outcome else {
            panic!("expected a bracket, got {:?}", search.outcome);
        };

        let solution = methods
            .bisection(lower, upper, &Config::new(1e-10, 100))
            .expect("should solve");
        assert_relative_eq!(solution.root().unwrap(), 0.739_085_133_215, epsilon = 1e-9);
    }

    #[test]
    fn metric_can_be_swapped() {
        let methods =
            BracketingMethods::new(ClosureFn::new(|x: f64| x * x - 2.0)).with_metric(Absolute);
        let solution = methods
            .false_position(1.0, 2.0, &Config::new(1e-12, 100))
            .expect("should solve");

        assert!(solution.outcome.is_converged());
        assert_eq!(methods.metric(), &Absolute);
    }
}
