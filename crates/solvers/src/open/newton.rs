//! Newton's method `x_{k+1} = x_k − f(x_k)/f'(x_k)`.
//!
//! Converges quadratically near a simple root. At a root of even multiplicity
//! the derivative vanishes together with `f` and the iteration stalls; that
//! case is reported as [`Outcome::MultipleRootSuspected`] rather than as a
//! failure.

use rootlab_core::{ErrorMetric, Function, Observer};

use crate::{
    Config, Error, Outcome, Solution,
    evaluate::{derivative, error, value},
    trace::Recorder,
};

/// One row of a Newton trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonStep {
    pub x: f64,
    pub fx: f64,
    pub dfx: f64,
    /// Error between this iterate and the previous one; `None` on row 0.
    pub error: Option<f64>,
}

/// Runs Newton's method from `x0`.
///
/// The loop stops when `f(x)` or `f'(x)` is exactly zero, the error meets
/// the tolerance, or the budget runs out. Outcomes are checked in that
/// order: exact root, approximate root, suspected multiple root (the
/// derivative vanished), failure.
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
    config: &Config,
    observer: Obs,
) -> Result<Solution<NewtonStep>, Error>
where
    F: Function,
    E: ErrorMetric,
    Obs: Observer<NewtonStep>,
{
    config.validate()?;

    let mut recorder = Recorder::new("newton", observer);

    let mut x = x0;
    let mut fx = value(function, x)?;
    let mut dfx = derivative(function, x, 1)?;
    let mut err = None;
    let mut iters = 0;

    recorder.record(NewtonStep {
        x,
        fx,
        dfx,
        error: err,
    });

    #[allow(clippy::float_cmp)]
    while fx != 0.0 && dfx != 0.0 && config.exceeds(err) && iters < config.max_iters {
        let next = x - fx / dfx;
        fx = value(function, next)?;
        dfx = derivative(function, next, 1)?;
        err = error(metric, x, next)?;
        x = next;
        iters += 1;

        recorder.record(NewtonStep {
            x,
            fx,
            dfx,
            error: err,
        });
    }

    #[allow(clippy::float_cmp)]
    let outcome = if fx == 0.0 {
        Outcome::ExactRoot { x }
    } else if config.is_met(err) {
        Outcome::ApproximateRoot {
            x,
            tolerance: config.tolerance,
        }
    } else if dfx == 0.0 {
        Outcome::MultipleRootSuspected { x }
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
    config: &Config,
) -> Result<Solution<NewtonStep>, Error>
where
    F: Function,
    E: ErrorMetric,
{
    solve(function, metric, x0, config, ())
}
