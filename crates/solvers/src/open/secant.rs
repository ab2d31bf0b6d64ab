//! The secant method.
//!
//! Newton's method with the derivative replaced by the slope through the two
//! most recent iterates, so only `f` is evaluated. Convergence near a simple
//! root is superlinear, with order `(1 + √5)/2`.

use rootlab_core::{ErrorMetric, Function, Observer};

use crate::{
    Config, Error, Outcome, Solution,
    evaluate::{error, value},
    trace::Recorder,
};

/// One row of a secant trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecantStep {
    pub x: f64,
    pub fx: f64,
    /// `f(x_k) − f(x_{k−1})`; `None` on row 0.
    pub denominator: Option<f64>,
    /// `None` on rows 0 and 1.
    pub error: Option<f64>,
}

/// Runs the secant method from the starting pair `(x0, x1)`.
///
/// If `f(x0)` is exactly zero the run ends with a single-row trace.
/// Otherwise rows 0 and 1 hold the two starting points and each iteration
/// appends one row. A vanishing denominator ends the run with
/// [`Outcome::MultipleRootSuspected`] unless a root was already reached.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an invalid config, and
/// [`Error::Metric`] or [`Error::Function`] if the metric or the function
/// fails mid-run.
pub fn solve<F, E, Obs>(
    function: &F,
    metric: &E,
    x0: f64,
    x1: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<SecantStep>, Error>
where
    F: Function,
    E: ErrorMetric,
    Obs: Observer<SecantStep>,
{
    config.validate()?;

    let mut recorder = Recorder::new("secant", observer);

    let mut x0 = x0;
    let mut fx0 = value(function, x0)?;
    recorder.record(SecantStep {
        x: x0,
        fx: fx0,
        denominator: None,
        error: None,
    });

    #[allow(clippy::float_cmp)]
    if fx0 == 0.0 {
        return Ok(recorder.finish(Outcome::ExactRoot { x: x0 }, 0));
    }

    let mut x1 = x1;
    let mut fx1 = value(function, x1)?;
    let mut den = fx1 - fx0;
    let mut err = None;
    let mut iters = 0;

    recorder.record(SecantStep {
        x: x1,
        fx: fx1,
        denominator: Some(den),
        error: err,
    });

    #[allow(clippy::float_cmp)]
    while fx1 != 0.0 && config.exceeds(err) && den != 0.0 && iters < config.max_iters {
        let x2 = x1 - fx1 * (x1 - x0) / den;
        err = error(metric, x1, x2)?;

        x0 = x1;
        fx0 = fx1;
        x1 = x2;
        fx1 = value(function, x1)?;
        den = fx1 - fx0;
        iters += 1;

        recorder.record(SecantStep {
            x: x1,
            fx: fx1,
            denominator: Some(den),
            error: err,
        });
    }

    #[allow(clippy::float_cmp)]
    let outcome = if fx1 == 0.0 {
        Outcome::ExactRoot { x: x1 }
    } else if config.is_met(err) {
        Outcome::ApproximateRoot {
            x: x1,
            tolerance: config.tolerance,
        }
    } else if den == 0.0 {
        Outcome::MultipleRootSuspected { x: x1 }
    } else {
        Outcome::Failure { iters }
    };

    Ok(recorder.finish(outcome, iters))
}

/// Runs [`solve`] without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, E>(
    function: &F,
    metric: &E,
    x0: f64,
    x1: f64,
    config: &Config,
) -> Result<Solution<SecantStep>, Error>
where
    F: Function,
    E: ErrorMetric,
{
    solve(function, metric, x0, x1, config, ())
}
