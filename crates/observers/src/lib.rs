//! Trace consumers for rootlab solvers.
//!
//! This crate turns iteration records into something a person can read and
//! provides [`Observer`] implementations that work across every method.
//!
//! # Modules
//!
//! - [`table`] — [`Columns`] layouts for each record type and the text
//!   [`Table`] renderer
//! - [`traits`] — capability traits for cross-method observers
//!   ([`HasIterate`], [`HasError`])
//!
//! # Observers
//!
//! - [`ErrorHistory`] — collects errors and estimates the convergence order
//! - [`TracingObserver`] — logs each record through `tracing`
//!
//! [`Observer`]: rootlab_core::Observer
//! [`Columns`]: table::Columns
//! [`Table`]: table::Table
//! [`HasIterate`]: traits::HasIterate
//! [`HasError`]: traits::HasError

pub mod table;
pub mod traits;

mod history;
mod logging;
mod report;

pub use history::ErrorHistory;
pub use logging::TracingObserver;
pub use report::Report;
