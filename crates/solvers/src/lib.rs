//! Root-finding methods for single-variable real functions.
//!
//! Every method returns a [`Solution`]: the termination [`Outcome`] together
//! with the full [`Trace`] of iteration records. Records are also streamed
//! to an [`Observer`] as they are produced.
//!
//! # Methods
//!
//! - [`bracketing`] — incremental search, bisection and false position
//! - [`open`] — fixed point, Newton's method, secant and multiple-root Newton
//!
//! Each method lives in its own module with a `solve` function and a
//! `solve_unobserved` wrapper. [`BracketingMethods`] and [`OpenMethods`]
//! bundle a function with an error metric for repeated use.
//!
//! # Example
//!
//! ```
//! use rootlab_core::Polynomial;
//! use rootlab_solvers::{Config, OpenMethods, Outcome};
//!
//! // x² − 2
//! let methods = OpenMethods::new(Polynomial::new([-2.0, 0.0, 1.0]));
//! let solution = methods.newton(1.0, &Config::new(1e-10, 50)).unwrap();
//!
//! assert!(matches!(solution.outcome, Outcome::ApproximateRoot { .. }));
//! assert!((solution.root().unwrap() - 2.0_f64.sqrt()).abs() < 1e-10);
//! ```
//!
//! [`Observer`]: rootlab_core::Observer

mod config;
mod error;
mod evaluate;
mod outcome;
mod sign;
mod solution;
mod trace;

pub mod bracketing;
pub mod open;

pub use bracketing::BracketingMethods;
pub use config::Config;
pub use error::{Error, InvalidInput};
pub use open::OpenMethods;
pub use outcome::Outcome;
pub use solution::Solution;
pub use trace::Trace;
