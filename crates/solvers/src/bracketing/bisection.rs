//! Bisection and false position over a sign-changing bracket.
//!
//! Both methods share one loop and differ only in how the next interior
//! point is chosen, see [`Rule`]. The bracket `[xi, xs]` keeps a sign change
//! at the start of every iteration: after `f(xm)` is evaluated, the endpoint
//! whose value has the same sign as `f(xm)` is replaced by `xm`.

use rootlab_core::{ErrorMetric, Function, Observer};

use crate::{
    Config, Error, InvalidInput, Outcome, Solution,
    evaluate::{error, value},
    sign,
    trace::Recorder,
};

/// How the next interior point of the bracket is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
    /// Midpoint `(xi + xs) / 2`.
    Bisection,

    /// Where the chord through both endpoints crosses zero.
    FalsePosition,
}

impl Rule {
    /// Returns the next interior point of `[xi, xs]`.
    #[must_use]
    pub fn next(self, xi: f64, f_xi: f64, xs: f64, f_xs: f64) -> f64 {
        match self {
            Rule::Bisection => 0.5 * (xi + xs),
            Rule::FalsePosition => xi - f_xi * (xs - xi) / (f_xs - f_xi),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Rule::Bisection => "bisection",
            Rule::FalsePosition => "false_position",
        }
    }
}

/// One row of a bisection or false position trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketStep {
    /// Lower end of the bracket that produced `xm`.
    pub xi: f64,
    /// Upper end of the bracket that produced `xm`.
    pub xs: f64,
    /// Interior point chosen by the rule.
    pub xm: f64,
    /// `f(xm)`.
    pub f_xm: f64,
    /// Error between this `xm` and the previous one; `None` on row 0.
    pub error: Option<f64>,
}

/// Finds a root inside `[xi, xs]` using the given [`Rule`].
///
/// If either endpoint is an exact root the run ends immediately with an
/// empty trace. Otherwise each iteration emits one [`BracketStep`] to the
/// observer, including the first interior point.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a negative tolerance, an empty budget
/// or endpoints without a sign change, in that order. Returns
/// [`Error::Metric`] or [`Error::Function`] if the metric or the function
/// fails mid-run, and [`Error::NonFiniteValue`] if `f` is not finite at an
/// interior point.
pub fn solve<F, E, Obs>(
    function: &F,
    metric: &E,
    bracket: [f64; 2],
    config: &Config,
    rule: Rule,
    observer: Obs,
) -> Result<Solution<BracketStep>, Error>
where
    F: Function,
    E: ErrorMetric,
    Obs: Observer<BracketStep>,
{
    config.validate()?;

    let mut recorder = Recorder::new(rule.name(), observer);
    let [mut xi, mut xs] = bracket;

    let mut f_xi = value(function, xi)?;
    let mut f_xs = value(function, xs)?;

    #[allow(clippy::float_cmp)]
    if f_xi == 0.0 {
        return Ok(recorder.finish(Outcome::ExactRoot { x: xi }, 0));
    }
    #[allow(clippy::float_cmp)]
    if f_xs == 0.0 {
        return Ok(recorder.finish(Outcome::ExactRoot { x: xs }, 0));
    }

    if !sign::opposite(f_xi, f_xs) {
        return Err(InvalidInput::NoSignChange {
            lower: xi,
            upper: xs,
            f_lower: f_xi,
            f_upper: f_xs,
        }
        .into());
    }

    let mut xm = rule.next(xi, f_xi, xs, f_xs);
    let mut f_xm = interior_value(function, xm, 0)?;
    let mut err = None;
    let mut iters = 1;

    recorder.record(BracketStep {
        xi,
        xs,
        xm,
        f_xm,
        error: err,
    });

    #[allow(clippy::float_cmp)]
    while config.exceeds(err) && f_xm != 0.0 && iters < config.max_iters {
        if sign::opposite(f_xi, f_xm) {
            xs = xm;
            f_xs = f_xm;
        } else {
            xi = xm;
            f_xi = f_xm;
        }

        let previous = xm;
        xm = rule.next(xi, f_xi, xs, f_xs);
        f_xm = interior_value(function, xm, iters)?;
        err = error(metric, xm, previous)?;
        iters += 1;

        recorder.record(BracketStep {
            xi,
            xs,
            xm,
            f_xm,
            error: err,
        });
    }

    #[allow(clippy::float_cmp)]
    let outcome = if f_xm == 0.0 {
        Outcome::ExactRoot { x: xm }
    } else if config.is_met(err) {
        Outcome::ApproximateRoot {
            x: xm,
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
    bracket: [f64; 2],
    config: &Config,
    rule: Rule,
) -> Result<Solution<BracketStep>, Error>
where
    F: Function,
    E: ErrorMetric,
{
    solve(function, metric, bracket, config, rule, ())
}

/// Evaluates `f` at an interior point, whose sign decides the next bracket.
fn interior_value<F: Function>(function: &F, x: f64, iters: usize) -> Result<f64, Error> {
    let fx = value(function, x)?;
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(Error::NonFiniteValue { x, iters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use rootlab_core::{Absolute, ClosureFn, Polynomial, Relative};

    fn sqrt_two() -> Polynomial {
        Polynomial::new([-2.0, 0.0, 1.0])
    }

    #[test]
    fn bisection_finds_sqrt_two() {
        let config = Config::new(1e-6, 100);
        let solution =
            solve_unobserved(&sqrt_two(), &Relative, [1.0, 2.0], &config, Rule::Bisection)
                .expect("should solve");

        assert!(matches!(solution.outcome, Outcome::ApproximateRoot { .. }));
        assert!(solution.iters <= 25);
        assert_relative_eq!(solution.root().unwrap(), 2.0_f64.sqrt(), epsilon = 1e-5);
        assert_eq!(solution.trace.len(), solution.iters);
    }

    #[test]
    fn false_position_finds_sqrt_two() {
        let config = Config::new(1e-6, 100);
        let solution = solve_unobserved(
            &sqrt_two(),
            &Relative,
            [1.0, 2.0],
            &config,
            Rule::FalsePosition,
        )
        .expect("should solve");

        assert!(matches!(solution.outcome, Outcome::ApproximateRoot { .. }));
        assert!(solution.iters <= 25);
        assert_relative_eq!(solution.root().unwrap(), 2.0_f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn first_row_has_no_error() {
        let solution = solve_unobserved(
            &sqrt_two(),
            &Relative,
            [1.0, 2.0],
            &Config::new(1e-6, 100),
            Rule::Bisection,
        )
        .expect("should solve");

        let first = solution.trace.first().expect("at least one row");
        assert_eq!(first.error, None);
        assert_relative_eq!(first.xm, 1.5);
        assert!(solution.trace.iter().skip(1).all(|row| row.error.is_some()));
    }

    #[test]
    fn bracket_keeps_sign_change() {
        let f = sqrt_two();
        let config = Config::new(1e-12, 60);
        for rule in [Rule::Bisection, Rule::FalsePosition] {
            let mut rows = Vec::new();
            let observer = |row: &BracketStep| rows.push(*row);
            solve(&f, &Relative, [1.0, 2.0], &config, rule, observer).expect("should solve");

            for row in &rows {
                let f_xi = f.eval(row.xi).unwrap();
                let f_xs = f.eval(row.xs).unwrap();
                assert!(f_xi * f_xs < 0.0, "{rule:?} lost the bracket at {row:?}");
            }
        }
    }

    #[test]
    fn rejects_negative_tolerance_before_evaluating() {
        let calls = Cell::new(0);
        let result = solve_unobserved(
            &CountingFn(&calls),
            &Relative,
            [1.0, 2.0],
            &Config::new(-1.0, 10),
            Rule::Bisection,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInput::Tolerance { .. }))
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn rejects_empty_budget() {
        let result = solve_unobserved(
            &sqrt_two(),
            &Relative,
            [1.0, 2.0],
            &Config::new(1e-6, 0),
            Rule::Bisection,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInput::MaxIters { max_iters: 0 }))
        ));
    }

    #[test]
    fn rejects_interval_without_sign_change() {
        let config = Config::new(1e-6, 10);

        let result = solve_unobserved(&sqrt_two(), &Relative, [1.0, 1.0], &config, Rule::Bisection);
        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInput::NoSignChange { .. }))
        ));

        let result = solve_unobserved(&sqrt_two(), &Relative, [2.0, 3.0], &config, Rule::Bisection);
        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInput::NoSignChange { .. }))
        ));
    }

    #[test]
    fn endpoint_root_short_circuits() {
        // x² − 4
        let f = Polynomial::new([-4.0, 0.0, 1.0]);
        let config = Config::new(1e-6, 10);

        let solution = solve_unobserved(&f, &Relative, [2.0, 5.0], &config, Rule::Bisection)
            .expect("should solve");
        assert_eq!(solution.outcome, Outcome::ExactRoot { x: 2.0 });
        assert!(solution.trace.is_empty());
        assert_eq!(solution.iters, 0);

        let solution = solve_unobserved(&f, &Relative, [0.0, 2.0], &config, Rule::FalsePosition)
            .expect("should solve");
        assert_eq!(solution.outcome, Outcome::ExactRoot { x: 2.0 });
    }

    #[test]
    fn exact_midpoint_root() {
        // x − 1 on [0, 2]: the first midpoint is the root.
        let f = Polynomial::new([-1.0, 1.0]);
        let solution = solve_unobserved(
            &f,
            &Relative,
            [0.0, 2.0],
            &Config::new(1e-6, 10),
            Rule::Bisection,
        )
        .expect("should solve");

        assert_eq!(solution.outcome, Outcome::ExactRoot { x: 1.0 });
        assert_eq!(solution.trace.len(), 1);
    }

    #[test]
    fn budget_exhaustion_is_failure() {
        let solution = solve_unobserved(
            &sqrt_two(),
            &Absolute,
            [1.0, 2.0],
            &Config::new(0.0, 5),
            Rule::Bisection,
        )
        .expect("should run");

        assert_eq!(solution.outcome, Outcome::Failure { iters: 5 });
        assert_eq!(solution.trace.len(), 5);
    }

    #[test]
    fn single_iteration_budget_cannot_converge() {
        let solution = solve_unobserved(
            &sqrt_two(),
            &Relative,
            [1.0, 2.0],
            &Config::new(10.0, 1),
            Rule::Bisection,
        )
        .expect("should run");

        assert_eq!(solution.outcome, Outcome::Failure { iters: 1 });
    }

    #[test]
    fn reruns_are_identical() {
        let config = Config::new(1e-9, 100);
        let run = || {
            solve_unobserved(&sqrt_two(), &Relative, [1.0, 2.0], &config, Rule::FalsePosition)
                .expect("should solve")
        };
        let first = run();
        let second = run();
        assert_eq!(first, second);
    }

    #[test]
    fn non_finite_interior_value_is_a_fault() {
        // x² − 2 with a hole on (1.3, 1.4), reached at the third midpoint.
        let f = ClosureFn::new(|x: f64| {
            if x > 1.3 && x < 1.4 {
                f64::NAN
            } else {
                x * x - 2.0
            }
        });
        let mut seen = 0;
        let result = solve(
            &f,
            &Absolute,
            [1.0, 2.0],
            &Config::new(1e-9, 100),
            Rule::Bisection,
            |_: &BracketStep| seen += 1,
        );

        match result {
            Err(err @ Error::NonFiniteValue { x, iters }) => {
                assert!(err.is_numeric_fault());
                assert_relative_eq!(x, 1.375);
                assert_eq!(iters, 2);
            }
            other => panic!("expected a non-finite value fault, got {other:?}"),
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn non_finite_first_midpoint_is_a_fault() {
        let f = ClosureFn::new(|x: f64| {
            if x > 1.45 && x < 1.55 {
                f64::INFINITY
            } else {
                x * x - 2.0
            }
        });
        let result = solve_unobserved(
            &f,
            &Relative,
            [1.0, 2.0],
            &Config::default(),
            Rule::Bisection,
        );
        assert!(matches!(result, Err(Error::NonFiniteValue { iters: 0, .. })));
    }

    /// Counts evaluations of `x² − 2`.
    struct CountingFn<'a>(&'a Cell<usize>);

    impl Function for CountingFn<'_> {
        type Error = std::convert::Infallible;

        fn eval(&self, x: f64) -> Result<f64, Self::Error> {
            self.0.set(self.0.get() + 1);
            Ok(x * x - 2.0)
        }

        fn derivative(&self, x: f64, _order: usize) -> Result<f64, Self::Error> {
            Ok(2.0 * x)
        }
    }
}
