//! Fixed-point iteration `x_{k+1} = g(x_k)`.
//!
//! A root of `f` is a fixed point of a suitable `g`, for example
//! `g(x) = x − f(x)/c`. The iteration converges when `|g'| < 1` near the
//! root. Only `f` and `g` are evaluated; no derivatives are needed.

use rootlab_core::{ErrorMetric, Function, Observer};

use crate::{
    Config, Error, Outcome, Solution,
    evaluate::{error, value},
    trace::Recorder,
};

/// One row of a fixed-point trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointStep {
    pub x: f64,
    pub fx: f64,
    /// Error between this iterate and the previous one; `None` on row 0.
    pub error: Option<f64>,
}

/// Iterates `g` from `x0` until `f` vanishes or the error meets the tolerance.
///
/// Row 0 of the trace holds `x0`. If `f(x0)` is already zero the run ends
/// with [`Outcome::ExactRoot`] and that single row.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an invalid config, and
/// [`Error::Metric`] or [`Error::Function`] if the metric, `f` or `g` fail.
pub fn solve<F, G, E, Obs>(
    function: &F,
    g: &G,
    metric: &E,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<FixedPointStep>, Error>
where
    F: Function,
    G: Function,
    E: ErrorMetric,
    Obs: Observer<FixedPointStep>,
{
    config.validate()?;

    let mut recorder = Recorder::new("fixed_point", observer);

    let mut x = x0;
    let mut fx = value(function, x)?;
    let mut err = None;
    let mut iters = 0;

    recorder.record(FixedPointStep { x, fx, error: err });

    #[allow(clippy::float_cmp)]
    while fx != 0.0 && config.exceeds(err) && iters < config.max_iters {
        let next = value(g, x)?;
        fx = value(function, next)?;
        err = error(metric, x, next)?;
        x = next;
        iters += 1;

        recorder.record(FixedPointStep { x, fx, error: err });
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
pub fn solve_unobserved<F, G, E>(
    function: &F,
    g: &G,
    metric: &E,
    x0: f64,
    config: &Config,
) -> Result<Solution<FixedPointStep>, Error>
where
    F: Function,
    G: Function,
    E: ErrorMetric,
{
    solve(function, g, metric, x0, config, ())
}
