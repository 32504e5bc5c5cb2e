//! High-level API for streaming filters.
//!
//! ## Purpose
//!
//! This module provides the fluent construction surface for the linear
//! engine and re-exports the cascade builder, so callers can assemble
//! filters without touching the layer internals.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Boundary coefficients are inferred from the
//!   supplied coefficient vectors, so the builder cannot produce a
//!   `SizeMismatch`; explicit bounds remain available through
//!   `LinearDifferenceFilter::new`.
//! * **Validated**: Coefficients are validated when `build()` is
//!   called, never silently corrected.
//!
//! ### Configuration flow
//!
//! 1. Create a [`LinearFilterBuilder`] via `LinearFilterBuilder::new()`.
//! 2. Supply `feedback` (a) and `feedforward` (b) coefficient vectors.
//! 3. Call `build()` to obtain the validated filter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::filters::linear::LinearDifferenceFilter;
use crate::primitives::errors::FilterError;

// Publicly re-exported types
pub use crate::adapters::cascade::{CascadeBuilder, CascadeStage, FilterCascade};

// ============================================================================
// Linear Filter Builder
// ============================================================================

/// Fluent builder for the linear difference-equation engine.
#[derive(Debug, Clone)]
pub struct LinearFilterBuilder<T> {
    /// Output (feedback) coefficient vector; its length is M.
    a: Vec<T>,

    /// Input (feedforward) coefficient vector; its length is N.
    b: Vec<T>,
}

impl<T: Float> LinearFilterBuilder<T> {
    /// Start a builder with empty coefficient vectors.
    pub fn new() -> Self {
        Self {
            a: Vec::new(),
            b: Vec::new(),
        }
    }

    /// Set the output (feedback) coefficients `a`; the output boundary
    /// coefficient M becomes their length.
    pub fn feedback(mut self, a: Vec<T>) -> Self {
        self.a = a;
        self
    }

    /// Set the input (feedforward) coefficients `b`; the input boundary
    /// coefficient N becomes their length.
    pub fn feedforward(mut self, b: Vec<T>) -> Self {
        self.b = b;
        self
    }

    /// Build the validated filter.
    pub fn build(self) -> Result<LinearDifferenceFilter<T>, FilterError> {
        let output_bound = self.a.len();
        let input_bound = self.b.len();
        LinearDifferenceFilter::new(output_bound, input_bound, self.a, self.b)
    }
}

impl<T: Float> Default for LinearFilterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
