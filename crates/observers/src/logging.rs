use rootlab_core::Observer;
use tracing::info;

use crate::table::Columns;

/// An observer that logs every record at `INFO` level.
///
/// Each event carries the label, the row index and the record's cells as
/// `header=value` pairs, for example `x=1.5 f(x)=0.25 error=NaN`. Nothing is
/// emitted unless a `tracing` subscriber is installed.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    label: String,
    rows: usize,
}

impl TracingObserver {
    /// Creates an observer that tags its events with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rows: 0,
        }
    }

    /// Returns the number of records logged so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn log<R: Columns>(&mut self, record: &R) {
        let cells = R::HEADERS
            .iter()
            .zip(record.cells())
            .map(|(header, value)| match value {
                Some(v) => format!("{header}={v}"),
                None => format!("{header}=NaN"),
            })
            .collect::<Vec<_>>()
            .join(" ");

        info!(label = %self.label, n = self.rows, "{cells}");
        self.rows += 1;
    }
}

impl<R: Columns> Observer<R> for TracingObserver {
    fn observe(&mut self, record: &R) {
        self.log(record);
    }
}

impl<R: Columns> Observer<R> for &mut TracingObserver {
    fn observe(&mut self, record: &R) {
        self.log(record);
    }
}
