use std::fmt;

use rootlab_solvers::Solution;

use crate::table::{Columns, Table};

/// A finished run rendered as its trace table followed by the outcome line.
///
/// ```
/// use rootlab_core::Polynomial;
/// use rootlab_observers::Report;
/// use rootlab_solvers::BracketingMethods;
///
/// let methods = BracketingMethods::new(Polynomial::new([-2.0, 0.0, 1.0]));
/// let solution = methods.incremental_search(0.0, 0.5, 10).unwrap();
///
/// let text = Report::new(&solution).to_string();
/// assert!(text.ends_with("there is a root between 1 and 1.5\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, R> {
    solution: &'a Solution<R>,
}

impl<'a, R: Columns> Report<'a, R> {
    #[must_use]
    pub fn new(solution: &'a Solution<R>) -> Self {
        Self { solution }
    }
}

impl<R: Columns> fmt::Display for Report<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Table::new(&self.solution.trace))?;
        writeln!(f, "{}", self.solution.outcome)
    }
}
