use std::fmt;

/// How a run terminated.
///
/// `Display` renders the one-line summary a report prints under the trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Outcome {
    /// `f(x)` evaluated to exactly zero.
    ExactRoot { x: f64 },

    /// The error metric fell to the tolerance or below.
    ApproximateRoot { x: f64, tolerance: f64 },

    /// A derivative or secant denominator vanished before convergence.
    ///
    /// Usually a sign of a root with even multiplicity.
    MultipleRootSuspected { x: f64 },

    /// Incremental search found consecutive points of opposite sign.
    SignChange { lower: f64, upper: f64 },

    /// The iteration budget ran out.
    Failure { iters: usize },
}

impl Outcome {
    /// Returns the root estimate, if the outcome carries one.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            Self::ExactRoot { x }
            | Self::ApproximateRoot { x, .. }
            | Self::MultipleRootSuspected { x } => Some(*x),
            Self::SignChange { .. } | Self::Failure { .. } => None,
        }
    }

    /// Returns true if the run found a root, exact or within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::ExactRoot { .. } | Self::ApproximateRoot { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactRoot { x } => write!(f, "{x} is a root"),
            Self::ApproximateRoot { x, tolerance } => write!(
                f,
                "{x} is an approximation to a root with tolerance = {tolerance}"
            ),
            Self::MultipleRootSuspected { x } => write!(f, "{x} is a possible multiple root"),
            Self::SignChange { lower, upper } => {
                write!(f, "there is a root between {lower} and {upper}")
            }
            Self::Failure { iters } => write!(f, "failure in {iters} iterations"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines() {
        assert_eq!(Outcome::ExactRoot { x: 2.0 }.to_string(), "2 is a root");
        assert_eq!(
            Outcome::ApproximateRoot {
                x: 1.5,
                tolerance: 0.001
            }
            .to_string(),
            "1.5 is an approximation to a root with tolerance = 0.001"
        );
        assert_eq!(
            Outcome::SignChange {
                lower: 1.0,
                upper: 1.5
            }
            .to_string(),
            "there is a root between 1 and 1.5"
        );
        assert_eq!(
            Outcome::Failure { iters: 12 }.to_string(),
            "failure in 12 iterations"
        );
    }

    #[test]
    fn root_estimates() {
        assert_eq!(Outcome::MultipleRootSuspected { x: 0.5 }.root(), Some(0.5));
        assert_eq!(Outcome::Failure { iters: 3 }.root(), None);
        assert!(!Outcome::MultipleRootSuspected { x: 0.5 }.is_converged());
        assert!(Outcome::ExactRoot { x: 0.0 }.is_converged());
    }
}
