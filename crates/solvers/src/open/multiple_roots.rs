//! Newton's method for multiple roots.
//!
//! Applies Newton's method to `u(x) = f(x)/f'(x)`, which has only simple
//! roots wherever `f` has roots of any multiplicity:
//!
//! ```text
//! x_{k+1} = x_k − f·f' / (f'² − f·f'')
//! ```
//!
//! Quadratic convergence is recovered at multiple roots at the cost of a
//! second derivative per step.

use rootlab_core::{ErrorMetric, Function, Observer};

use crate::{
    Config, Error, Outcome, Solution,
    evaluate::{derivative, error, value},
    trace::Recorder,
};

/// One row of a multiple-root trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultipleRootStep {
    pub x: f64,
    pub fx: f64,
    pub dfx: f64,
    pub d2fx: f64,
    pub error: Option<f64>,
}

/// Runs multiple-root Newton from `x0`.
///
/// Unlike [`newton`](super::newton), a stalled update is not classified:
/// when `f'² − f·f''` vanishes before `f` does, the run fails with
/// [`Error::ZeroDenominator`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an invalid config,
/// [`Error::ZeroDenominator`] when the update is undefined, and
/// [`Error::Metric`] or [`Error::Function`] if the metric or the function
/// fails mid-run.
pub fn solve<F, E, Obs>(
    function: &F,
    metric: &E,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<MultipleRootStep>, Error>
where
    F: Function,
    E: ErrorMetric,
    Obs: Observer<MultipleRootStep>,
{
    config.validate()?;

    let mut recorder = Recorder::new("multiple_roots", observer);

    let mut x = x0;
    let mut fx = value(function, x)?;
    let mut dfx = derivative(function, x, 1)?;
    let mut d2fx = derivative(function, x, 2)?;
    let mut err = None;
    let mut iters = 0;

    recorder.record(MultipleRootStep {
        x,
        fx,
        dfx,
        d2fx,
        error: err,
    });

    #[allow(clippy::float_cmp)]
    while fx != 0.0 && config.exceeds(err) && iters < config.max_iters {
        let den = dfx * dfx - fx * d2fx;
        if den == 0.0 {
            return Err(Error::ZeroDenominator { x, iters });
        }

        let next = x - fx * dfx / den;
        fx = value(function, next)?;
        dfx = derivative(function, next, 1)?;
        d2fx = derivative(function, next, 2)?;
        err = error(metric, x, next)?;
        x = next;
        iters += 1;

        recorder.record(MultipleRootStep {
            x,
            fx,
            dfx,
            d2fx,
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
) -> Result<Solution<MultipleRootStep>, Error>
where
    F: Function,
    E: ErrorMetric,
{
    solve(function, metric, x0, config, ())
}
