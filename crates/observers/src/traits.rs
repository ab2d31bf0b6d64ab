//! Capability traits for cross-method observers.
//!
//! Each method emits its own record type. These traits expose the values
//! several of them share, so one observer can watch any method.
//!
//! - [`HasIterate`] — records that carry the current root estimate
//! - [`HasError`] — records that carry an error column
//!
//! # Example
//!
//! ```rust
//! use rootlab_core::{Observer, Polynomial, Relative};
//! use rootlab_observers::traits::HasIterate;
//! use rootlab_solvers::{Config, open::newton};
//!
//! struct Iterates(Vec<f64>);
//!
//! impl<R: HasIterate> Observer<R> for &mut Iterates {
//!     fn observe(&mut self, record: &R) {
//!         self.0.push(record.iterate());
//!     }
//! }
//!
//! let f = Polynomial::new([-2.0, 0.0, 1.0]);
//! let mut seen = Iterates(Vec::new());
//! newton::solve(&f, &Relative, 1.0, &Config::default(), &mut seen).unwrap();
//! assert_eq!(seen.0[0], 1.0);
//! ```

use rootlab_solvers::{
    bracketing::{BracketStep, SearchStep},
    open::{FixedPointStep, MultipleRootStep, NewtonStep, SecantStep},
};

/// A record that carries the current root estimate.
pub trait HasIterate {
    /// Returns the estimate this record was produced for.
    fn iterate(&self) -> f64;
}

/// A record that carries an error column.
pub trait HasError {
    /// Returns the error, or `None` where it is undefined.
    fn error(&self) -> Option<f64>;
}

impl HasIterate for SearchStep {
    fn iterate(&self) -> f64 {
        self.x
    }
}

impl HasIterate for BracketStep {
    fn iterate(&self) -> f64 {
        self.xm
    }
}

macro_rules! impl_for_open_steps {
    ($($step:ty),*) => {
        $(
            impl HasIterate for $step {
                fn iterate(&self) -> f64 {
                    self.x
                }
            }

            impl HasError for $step {
                fn error(&self) -> Option<f64> {
                    self.error
                }
            }
        )*
    };
}

impl_for_open_steps!(FixedPointStep, NewtonStep, SecantStep, MultipleRootStep);

impl HasError for BracketStep {
    fn error(&self) -> Option<f64> {
        self.error
    }
}
