//! FIR specializations of the linear difference engine.
//!
//! ## Purpose
//!
//! This module provides the finite impulse response family: filters
//! whose output depends only on past inputs. Each one pre-populates the
//! coefficient vectors of [`LinearDifferenceFilter`] and delegates every
//! operation to it.
//!
//! ## Key concepts
//!
//! * **FIR**: output boundary `M = 0` and an empty feedback vector, so
//!   the output summation reduces to the persisted baseline alone.
//! * **Gain**: FIR with `N = 1` and `b = [g]`; pure scalar
//!   multiplication with one-step memory semantics inherited from the
//!   engine.
//! * **Binomial**: FIR whose taps are the binomial coefficients
//!   `C(N, i)`, generated internally by the math layer.
//!
//! ## Invariants
//!
//! * The wrapped engine always satisfies `a.len() == 0`.
//! * Binomial taps are derived, never supplied, so their length always
//!   equals the input boundary coefficient.
//!
//! ## Non-goals
//!
//! * No tap design (windowed sinc, least squares); taps are given or
//!   generated verbatim.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::filters::linear::LinearDifferenceFilter;
use crate::math::binomial::binomial_coefficients;
use crate::primitives::errors::FilterError;
use crate::primitives::traits::{Filter, Reset, ResetWith};

// ============================================================================
// FIR Filter
// ============================================================================

/// A finite impulse response filter: the linear engine with no output
/// feedback term.
#[derive(Debug, Clone)]
pub struct FirFilter<T: Float> {
    inner: LinearDifferenceFilter<T>,
}

impl<T: Float> FirFilter<T> {
    /// Construct an FIR filter with input boundary `input_bound` (N)
    /// and feedforward taps `b`.
    pub fn new(input_bound: usize, b: Vec<T>) -> Result<Self, FilterError> {
        Ok(Self {
            inner: LinearDifferenceFilter::new(0, input_bound, Vec::new(), b)?,
        })
    }

    /// The feedforward taps.
    pub fn taps(&self) -> &[T] {
        self.inner.feedforward()
    }

    /// The input boundary coefficient (N).
    pub fn input_bound(&self) -> usize {
        self.inner.input_bound()
    }
}

impl<T: Float> Filter for FirFilter<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        self.inner.filter(value)
    }
}

impl<T: Float> Reset for FirFilter<T> {
    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<T: Float> ResetWith for FirFilter<T> {
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        self.inner.reset_with(value)
    }
}

// ============================================================================
// Gain Filter
// ============================================================================

/// A pure scalar multiplier expressed through the FIR engine.
#[derive(Debug, Clone)]
pub struct GainFilter<T: Float> {
    inner: FirFilter<T>,
}

impl<T: Float> GainFilter<T> {
    /// Construct a gain filter multiplying each input by `gain`.
    pub fn new(gain: T) -> Result<Self, FilterError> {
        let mut b = Vec::with_capacity(1);
        b.push(gain);
        Ok(Self {
            inner: FirFilter::new(1, b)?,
        })
    }

    /// The gain applied to each input.
    pub fn gain(&self) -> T {
        self.inner.taps()[0]
    }
}

impl<T: Float> Filter for GainFilter<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        self.inner.filter(value)
    }
}

impl<T: Float> Reset for GainFilter<T> {
    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<T: Float> ResetWith for GainFilter<T> {
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        self.inner.reset_with(value)
    }
}

// ============================================================================
// Binomial Filter
// ============================================================================

/// An FIR filter whose taps are the binomial coefficients `C(N, i)`.
#[derive(Debug, Clone)]
pub struct BinomialFilter<T: Float> {
    inner: FirFilter<T>,
}

impl<T: Float> BinomialFilter<T> {
    /// Construct a binomial filter of order `input_bound` (N).
    ///
    /// Taps are generated by the multiplicative recurrence in the math
    /// layer, so their length equals `input_bound` by construction.
    pub fn new(input_bound: usize) -> Result<Self, FilterError> {
        Ok(Self {
            inner: FirFilter::new(input_bound, binomial_coefficients(input_bound))?,
        })
    }

    /// The binomial taps.
    pub fn taps(&self) -> &[T] {
        self.inner.taps()
    }
}

impl<T: Float> Filter for BinomialFilter<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        self.inner.filter(value)
    }
}

impl<T: Float> Reset for BinomialFilter<T> {
    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<T: Float> ResetWith for BinomialFilter<T> {
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        self.inner.reset_with(value)
    }
}
