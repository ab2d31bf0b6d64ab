//! Plain-text tables of iteration traces.
//!
//! Every record type implements [`Columns`], which names its columns and
//! yields one cell per column. [`Table`] lays a whole trace out with an `n`
//! index column; undefined cells print as `NaN`.
//!
//! ```text
//! n  xi   xs    xm    f(xm)  error
//! 0   1    2   1.5     0.25    NaN
//! 1   1  1.5  1.25  -0.4375    0.2
//! ```

use std::fmt;

use rootlab_solvers::{
    Trace,
    bracketing::{BracketStep, SearchStep},
    open::{FixedPointStep, MultipleRootStep, NewtonStep, SecantStep},
};

/// Column layout of a record type.
pub trait Columns {
    /// Column headers, in order.
    const HEADERS: &'static [&'static str];

    /// One cell per header; `None` where the value is undefined.
    fn cells(&self) -> Vec<Option<f64>>;
}

impl Columns for SearchStep {
    const HEADERS: &'static [&'static str] = &["x", "f(x)"];

    fn cells(&self) -> Vec<Option<f64>> {
        vec![Some(self.x), Some(self.fx)]
    }
}

impl Columns for BracketStep {
    const HEADERS: &'static [&'static str] = &["xi", "xs", "xm", "f(xm)", "error"];

    fn cells(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.xi),
            Some(self.xs),
            Some(self.xm),
            Some(self.f_xm),
            self.error,
        ]
    }
}

impl Columns for FixedPointStep {
    const HEADERS: &'static [&'static str] = &["x", "f(x)", "error"];

    fn cells(&self) -> Vec<Option<f64>> {
        vec![Some(self.x), Some(self.fx), self.error]
    }
}

impl Columns for NewtonStep {
    const HEADERS: &'static [&'static str] = &["x", "f(x)", "f'(x)", "error"];

    fn cells(&self) -> Vec<Option<f64>> {
        vec![Some(self.x), Some(self.fx), Some(self.dfx), self.error]
    }
}

impl Columns for SecantStep {
    const HEADERS: &'static [&'static str] = &["x", "f(x)", "denominator", "error"];

    fn cells(&self) -> Vec<Option<f64>> {
        vec![Some(self.x), Some(self.fx), self.denominator, self.error]
    }
}

impl Columns for MultipleRootStep {
    const HEADERS: &'static [&'static str] = &["x", "f(x)", "f'(x)", "f''(x)", "error"];

    fn cells(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.x),
            Some(self.fx),
            Some(self.dfx),
            Some(self.d2fx),
            self.error,
        ]
    }
}

/// A trace laid out as right-aligned text columns.
///
/// Rendering happens in [`Display`](fmt::Display); see also [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Table<'a, R> {
    trace: &'a Trace<R>,
}

impl<'a, R: Columns> Table<'a, R> {
    #[must_use]
    pub fn new(trace: &'a Trace<R>) -> Self {
        Self { trace }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let header: Vec<String> = std::iter::once("n")
            .chain(R::HEADERS.iter().copied())
            .map(String::from)
            .collect();

        let body = self.trace.iter().enumerate().map(|(n, record)| {
            std::iter::once(n.to_string())
                .chain(record.cells().into_iter().map(cell))
                .collect::<Vec<_>>()
        });

        std::iter::once(header).chain(body).collect()
    }
}

impl<R: Columns> fmt::Display for Table<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();

        let mut widths = vec![0; R::HEADERS.len() + 1];
        for row in &rows {
            for (width, text) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.len());
            }
        }

        for row in &rows {
            for (i, (text, width)) in row.iter().zip(&widths).enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{text:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders `trace` as a text table.
#[must_use]
pub fn render<R: Columns>(trace: &Trace<R>) -> String {
    Table::new(trace).to_string()
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NaN".to_owned(),
    }
}
