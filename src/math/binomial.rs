//! Binomial coefficient generation for binomial FIR filters.
//!
//! ## Purpose
//!
//! This module computes the row of binomial coefficients `C(n, i)` used
//! as the feedforward taps of a binomial smoothing filter.
//!
//! ## Design notes
//!
//! * **Multiplicative recurrence**: Coefficients are built with
//!   `C(n, i) = C(n, i-1) * (n - i + 1) / i`, giving O(n) total work
//!   and avoiding the factorial overflow of the naive formulation.
//! * **Generics**: Computed directly in the target `Float` type; row
//!   values are integers and remain exact within the mantissa for every
//!   practical filter order.
//!
//! ## Invariants
//!
//! * The returned vector has exactly `n` elements, `C(n, 0)..C(n, n-1)`.
//! * Rows are symmetric up to the boundary-exclusive truncation.
//!
//! ## Non-goals
//!
//! * No arbitrary-precision arithmetic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Binomial Coefficients
// ============================================================================

/// Compute the first `n` binomial coefficients of row `n`.
///
/// Returns `[C(n, 0), C(n, 1), ..., C(n, n-1)]`, matching the
/// boundary-exclusive tap convention of the linear engine. The `n = 0`
/// row is empty.
pub fn binomial_coefficients<T: Float>(n: usize) -> Vec<T> {
    let mut coefficients = Vec::with_capacity(n);
    if n == 0 {
        return coefficients;
    }

    let mut c = T::one();
    coefficients.push(c);
    for i in 1..n {
        // C(n, i) = C(n, i-1) * (n - i + 1) / i
        c = c * T::from(n - i + 1).unwrap() / T::from(i).unwrap();
        coefficients.push(c);
    }

    coefficients
}
