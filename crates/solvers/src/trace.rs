use std::{fmt::Debug, ops::Index, slice};

use rootlab_core::Observer;
use tracing::{debug, trace};

use crate::{Outcome, Solution};

/// Ordered iteration records of a single run.
///
/// Row `n` is the state after `n` iterations (or the `n`-th visited point for
/// incremental search). A trace is read-only once the run has returned it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Trace<R> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at row `n`.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&R> {
        self.records.get(n)
    }

    /// Returns the first record.
    #[must_use]
    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    /// Returns the last record.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Iterates over records in order.
    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Consumes the trace, returning its records.
    #[must_use]
    pub fn into_vec(self) -> Vec<R> {
        self.records
    }
}

impl<R> Index<usize> for Trace<R> {
    type Output = R;

    fn index(&self, n: usize) -> &R {
        &self.records[n]
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Builds a trace while streaming each record to an observer.
pub(crate) struct Recorder<R, Obs> {
    method: &'static str,
    trace: Trace<R>,
    observer: Obs,
}

impl<R, Obs> Recorder<R, Obs>
where
    R: Debug,
    Obs: Observer<R>,
{
    pub(crate) fn new(method: &'static str, observer: Obs) -> Self {
        Self {
            method,
            trace: Trace::new(),
            observer,
        }
    }

    /// Appends a record after the observer has seen it.
    pub(crate) fn record(&mut self, record: R) {
        trace!(method = self.method, n = self.trace.len(), ?record);
        self.observer.observe(&record);
        self.trace.records.push(record);
    }

    /// Finishes the run.
    pub(crate) fn finish(self, outcome: Outcome, iters: usize) -> Solution<R> {
        debug!(method = self.method, iters, %outcome, "run finished");
        Solution {
            outcome,
            trace: self.trace,
            iters,
        }
    }
}
