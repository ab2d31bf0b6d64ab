//! Shared fixtures for the integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use rootlab_core::{Function, FunctionError};
use rootlab_solvers::Config;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `ln(x) − 1`, defined only for positive `x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMinusOne;

#[derive(Debug, Error, PartialEq)]
pub enum LogError {
    #[error("ln is undefined at x = {x}")]
    Domain { x: f64 },

    #[error(transparent)]
    Order(#[from] FunctionError),
}

impl Function for LogMinusOne {
    type Error = LogError;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        if x <= 0.0 {
            return Err(LogError::Domain { x });
        }
        Ok(x.ln() - 1.0)
    }

    fn derivative(&self, x: f64, order: usize) -> Result<f64, Self::Error> {
        FunctionError::check_order(order)?;
        if x <= 0.0 {
            return Err(LogError::Domain { x });
        }
        // d^k/dx^k ln(x) = (−1)^(k−1) (k−1)! / x^k
        let mut factorial = 1.0;
        for k in 1..order {
            factorial *= k as f64;
        }
        let sign = if order % 2 == 1 { 1.0 } else { -1.0 };
        Ok(sign * factorial / x.powi(order as i32))
    }
}

/// Wraps a function and counts how often it is evaluated.
#[derive(Debug, Default)]
pub struct Counting<F> {
    inner: F,
    evals: AtomicUsize,
}

impl<F> Counting<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            evals: AtomicUsize::new(0),
        }
    }

    /// Returns the number of `eval` and `derivative` calls so far.
    pub fn evals(&self) -> usize {
        self.evals.load(Ordering::Relaxed)
    }
}

impl<F: Function> Function for Counting<F> {
    type Error = F::Error;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        self.evals.fetch_add(1, Ordering::Relaxed);
        self.inner.eval(x)
    }

    fn derivative(&self, x: f64, order: usize) -> Result<f64, Self::Error> {
        self.evals.fetch_add(1, Ordering::Relaxed);
        self.inner.derivative(x, order)
    }
}

/// A solver job as it might appear in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub x0: f64,
    #[serde(default)]
    pub config: Config,
}
