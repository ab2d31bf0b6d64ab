//! Core traits and types for rootlab.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Function`] — evaluates `f(x)` and its derivatives at a point
//! - [`ErrorMetric`] — measures the discrepancy between successive iterates
//! - [`Observer`] — receives each iteration record as a solver produces it
//!
//! It also ships two reference evaluators, [`Polynomial`] and [`ClosureFn`],
//! for callers that have no expression engine of their own.

mod function;
mod metric;
mod observer;

pub use function::{ClosureFn, Function, FunctionError, Polynomial};
pub use metric::{Absolute, ErrorMetric, MetricError, Relative};
pub use observer::Observer;
