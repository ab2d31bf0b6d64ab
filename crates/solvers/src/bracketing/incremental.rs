//! Incremental search for a sign-changing bracket.
//!
//! Starting at `x0`, the search steps forward by `|delta|` and stops at the
//! first pair of consecutive points whose values have opposite signs. The
//! bracket it reports is a valid starting interval for [`bisection`].
//!
//! [`bisection`]: super::bisection

use rootlab_core::{Function, Observer};

use crate::{
    Error, InvalidInput, Outcome, Solution, config::validate_max_iters, evaluate::value, sign,
    trace::Recorder,
};

/// One visited point of an incremental search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStep {
    pub x: f64,
    pub fx: f64,
}

/// Scans `x0, x0 + δ, x0 + 2δ, …` with `δ = |delta|` for a sign change.
///
/// Every visited point, including `x0`, is recorded. Points are computed as
/// `x0 + k·δ` so rounding does not accumulate over long scans.
///
/// The outcome is [`Outcome::ExactRoot`] if a visited point evaluates to
/// zero, [`Outcome::SignChange`] for the first bracketing pair, or
/// [`Outcome::Failure`] after `max_iters` steps without either.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `max_iters` is zero or `delta` is zero
/// or non-finite, before `f` is evaluated.
pub fn solve<F, Obs>(
    function: &F,
    x0: f64,
    delta: f64,
    max_iters: usize,
    observer: Obs,
) -> Result<Solution<SearchStep>, Error>
where
    F: Function,
    Obs: Observer<SearchStep>,
{
    validate_max_iters(max_iters)?;
    #[allow(clippy::float_cmp)]
    if !delta.is_finite() || delta == 0.0 {
        return Err(InvalidInput::Step { delta }.into());
    }
    let delta = delta.abs();

    let mut recorder = Recorder::new("incremental_search", observer);

    let mut x_prev = x0;
    let mut f_prev = value(function, x_prev)?;
    recorder.record(SearchStep {
        x: x_prev,
        fx: f_prev,
    });

    #[allow(clippy::float_cmp)]
    if f_prev == 0.0 {
        return Ok(recorder.finish(Outcome::ExactRoot { x: x_prev }, 0));
    }

    let mut iters = 1;
    let mut x = step(x0, delta, iters);
    let mut fx = value(function, x)?;

    while sign::same(f_prev, fx) && iters < max_iters {
        recorder.record(SearchStep { x, fx });

        x_prev = x;
        f_prev = fx;
        iters += 1;
        x = step(x0, delta, iters);
        fx = value(function, x)?;
    }

    recorder.record(SearchStep { x, fx });

    #[allow(clippy::float_cmp)]
    let outcome = if fx == 0.0 {
        Outcome::ExactRoot { x }
    } else if sign::opposite(f_prev, fx) {
        Outcome::SignChange {
            lower: x_prev,
            upper: x,
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
pub fn solve_unobserved<F: Function>(
    function: &F,
    x0: f64,
    delta: f64,
    max_iters: usize,
) -> Result<Solution<SearchStep>, Error> {
    solve(function, x0, delta, max_iters, ())
}

fn step(x0: f64, delta: f64, k: usize) -> f64 {
    x0 + k as f64 * delta
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootlab_core::{ClosureFn, Polynomial};

    fn sqrt_two() -> Polynomial {
        Polynomial::new([-2.0, 0.0, 1.0])
    }

    #[test]
    fn brackets_sqrt_two() {
        let solution = solve_unobserved(&sqrt_two(), 0.0, 0.5, 100).expect("should run");

        assert_eq!(
            solution.outcome,
            Outcome::SignChange {
                lower: 1.0,
                upper: 1.5
            }
        );
        let xs: Vec<f64> = solution.trace.iter().map(|row| row.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn negative_step_is_normalised() {
        let solution = solve_unobserved(&sqrt_two(), 0.0, -0.5, 100).expect("should run");
        assert_eq!(
            solution.outcome,
            Outcome::SignChange {
                lower: 1.0,
                upper: 1.5
            }
        );
    }

    #[test]
    fn start_on_root() {
        // x² − 4
        let f = Polynomial::new([-4.0, 0.0, 1.0]);
        let solution = solve_unobserved(&f, 2.0, 0.5, 10).expect("should run");

        assert_eq!(solution.outcome, Outcome::ExactRoot { x: 2.0 });
        assert_eq!(solution.trace.len(), 1);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn lands_on_root() {
        // x² − 4 visited at 0, 1, 2
        let f = Polynomial::new([-4.0, 0.0, 1.0]);
        let solution = solve_unobserved(&f, 0.0, 1.0, 10).expect("should run");

        assert_eq!(solution.outcome, Outcome::ExactRoot { x: 2.0 });
        assert_eq!(solution.trace.len(), 3);
    }

    #[test]
    fn exhausts_budget() {
        let solution = solve_unobserved(&sqrt_two(), 0.0, 0.1, 5).expect("should run");

        assert_eq!(solution.outcome, Outcome::Failure { iters: 5 });
        assert_eq!(solution.trace.len(), 6);
        assert_relative_eq!(solution.trace.last().unwrap().x, 0.5);
    }

    #[test]
    fn rejects_bad_input_without_evaluating() {
        let f = ClosureFn::new(|_| panic!("must not be evaluated"));

        assert!(matches!(
            solve_unobserved(&f, 0.0, 0.5, 0),
            Err(Error::InvalidInput(InvalidInput::MaxIters { max_iters: 0 }))
        ));
        assert!(matches!(
            solve_unobserved(&f, 0.0, 0.0, 10),
            Err(Error::InvalidInput(InvalidInput::Step { .. }))
        ));
        assert!(matches!(
            solve_unobserved(&f, 0.0, f64::NAN, 10),
            Err(Error::InvalidInput(InvalidInput::Step { .. }))
        ));
    }

    #[test]
    fn observer_sees_every_point() {
        let mut count = 0;
        let solution = solve(&sqrt_two(), 0.0, 0.5, 100, |_: &SearchStep| count += 1)
            .expect("should run");
        assert_eq!(count, solution.trace.len());
    }
}
