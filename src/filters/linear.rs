//! General scalar filter over a rational difference equation.
//!
//! ## Purpose
//!
//! This module implements the linear engine behind the FIR, gain, and
//! binomial filters: the recurrence
//!
//! ```text
//! y(i) + a(1)*y(i-1) + ... + a(M-1)*y(i-M+1)
//!     = b(0)*x(i) + b(1)*x(i-1) + ... + b(N-1)*x(i-N+1)
//! ```
//!
//! solved for `y(i)` at each call.
//!
//! ## Design notes
//!
//! * **Indexing convention**: Boundary-exclusive. `b` has length `N` and
//!   is summed over `n in [0, N)`; `a` has length `M` and is summed over
//!   `m in [1, M)`, with `a[0]` the reserved unit coefficient of `y(i)`
//!   itself (excluded from the sum).
//! * **Boundary truncation**: Both summations break once `i - k < 0`;
//!   history before t = 0 is treated as zero.
//! * **Baselines**: `input_sum` and `output_sum` persist across calls and
//!   are added to each summation. They are zero after construction and
//!   re-seeded by `reset_with` to the closed-form steady state.
//! * **Eager validation**: Structural parameters are checked at
//!   construction; per-call guards run before any mutation so a failed
//!   call never corrupts state.
//!
//! ## Invariants
//!
//! * `a.len() == M` and `b.len() == N` at all times.
//! * `iteration` equals the length of both history buffers.
//! * All stored coefficients, inputs, and outputs are finite.
//!
//! ## Non-goals
//!
//! * No coefficient redesign (windowing, normalization) after
//!   construction.
//! * No batch processing; one value per call.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::FilterError;
use crate::primitives::traits::{Filter, Reset, ResetWith};

// ============================================================================
// Linear Difference Filter
// ============================================================================

/// A scalar filter implementing a rational difference equation over
/// bounded input/output coefficient windows.
#[derive(Debug, Clone)]
pub struct LinearDifferenceFilter<T: Float> {
    /// Output boundary coefficient (M).
    output_bound: usize,

    /// Input boundary coefficient (N).
    input_bound: usize,

    /// Current iteration of the filter.
    iteration: usize,

    /// Persisted baseline added to the input summation.
    input_sum: T,

    /// Persisted baseline added to the output summation.
    output_sum: T,

    /// Output (feedback) coefficient vector, length M.
    a: Vec<T>,

    /// Input (feedforward) coefficient vector, length N.
    b: Vec<T>,

    /// Input history, indexed by iteration.
    x: Vec<T>,

    /// Output history, indexed by iteration.
    y: Vec<T>,
}

impl<T: Float> LinearDifferenceFilter<T> {
    /// Construct a filter with boundary coefficients `output_bound` (M)
    /// and `input_bound` (N) and coefficient vectors `a` and `b`.
    ///
    /// Fails with `SizeMismatch` when a vector's length does not equal
    /// its boundary coefficient, or `MissingValue` when a coefficient is
    /// non-finite.
    pub fn new(
        output_bound: usize,
        input_bound: usize,
        a: Vec<T>,
        b: Vec<T>,
    ) -> Result<Self, FilterError> {
        Validator::require_size(&a, output_bound, "a")?;
        Validator::require_size(&b, input_bound, "b")?;
        Validator::require_all_finite(&a, "a")?;
        Validator::require_all_finite(&b, "b")?;

        Ok(Self {
            output_bound,
            input_bound,
            iteration: 0,
            input_sum: T::zero(),
            output_sum: T::zero(),
            a,
            b,
            x: Vec::new(),
            y: Vec::new(),
        })
    }

    /// Sum the input side of the equation: `b(n) * x(i - n)` for
    /// `n in [0, N)`, plus the persisted baseline.
    fn sum_input(&self) -> T {
        let mut sum = T::zero();
        for n in 0..self.input_bound {
            if self.iteration < n {
                // Only zero-valued history remains, so stop.
                break;
            }
            sum = sum + self.b[n] * self.x[self.iteration - n];
        }
        sum + self.input_sum
    }

    /// Sum the output side of the equation without the current output:
    /// `a(m) * y(i - m)` for `m in [1, M)`, plus the persisted baseline.
    fn sum_output(&self) -> T {
        let mut sum = T::zero();
        for m in 1..self.output_bound {
            if self.iteration < m {
                break;
            }
            sum = sum + self.a[m] * self.y[self.iteration - m];
        }
        sum + self.output_sum
    }

    /// The persisted input-side baseline.
    pub fn input_sum(&self) -> T {
        self.input_sum
    }

    /// The persisted output-side baseline.
    pub fn output_sum(&self) -> T {
        self.output_sum
    }

    /// The input boundary coefficient (N).
    pub fn input_bound(&self) -> usize {
        self.input_bound
    }

    /// The output boundary coefficient (M).
    pub fn output_bound(&self) -> usize {
        self.output_bound
    }

    /// The input (feedforward) coefficient vector.
    pub fn feedforward(&self) -> &[T] {
        &self.b
    }

    /// Number of values filtered since construction or the last reset.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

impl<T: Float> Filter for LinearDifferenceFilter<T> {
    type Input = T;
    type Output = T;

    /// Filter a single input value through the difference equation.
    ///
    /// The input is appended to the input history, the two summations
    /// are evaluated, and their difference becomes `y(i)`, which is
    /// appended to the output history before the iteration advances.
    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;
        Validator::require_non_empty(&self.b, "b")?;

        // Grow-on-push keeps the histories in lockstep with the
        // iteration counter.
        debug_assert_eq!(self.iteration, self.x.len());
        debug_assert_eq!(self.iteration, self.y.len());

        self.x.push(value);
        let output = self.sum_input() - self.sum_output();
        self.y.push(output);
        self.iteration += 1;
        Ok(output)
    }
}

impl<T: Float> Reset for LinearDifferenceFilter<T> {
    /// Equivalent to `reset_with(0)`: zeroed baselines, empty history.
    fn reset(&mut self) {
        self.iteration = 0;
        self.input_sum = T::zero();
        self.output_sum = T::zero();
        self.x.clear();
        self.y.clear();
    }
}

impl<T: Float> ResetWith for LinearDifferenceFilter<T> {
    /// Re-seed the filter as though it had been fed the steady-state
    /// input `value` indefinitely.
    ///
    /// Sets `input_sum = r` and `output_sum = r * sum(b) / (1 + sum(a))`,
    /// the closed-form steady-state solution of the recurrence, and
    /// clears both histories.
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        Validator::require_finite(value, "reset value")?;

        let mut dividend = T::zero();
        for n in 0..self.input_bound {
            dividend = dividend + self.b[n];
        }
        let mut quotient = T::one();
        for m in 1..self.output_bound {
            quotient = quotient + self.a[m];
        }

        self.iteration = 0;
        self.x.clear();
        self.y.clear();
        self.input_sum = value;
        self.output_sum = value * dividend / quotient;
        Ok(())
    }
}
