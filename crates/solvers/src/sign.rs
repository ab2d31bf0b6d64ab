//! Sign comparisons that do not underflow.
//!
//! `a * b < 0.0` misses sign changes when the product underflows to zero,
//! so both helpers compare the operands directly. `NaN` never matches.

/// Returns true if `a` and `b` are both non-zero with opposite signs.
pub(crate) fn opposite(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

/// Returns true if `a` and `b` are both non-zero with the same sign.
pub(crate) fn same(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}
