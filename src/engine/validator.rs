//! Input validation for filter construction and per-value operations.
//!
//! ## Purpose
//!
//! This module provides the validation barrier that protects every
//! filter from bad inputs or operational data: absent (non-finite)
//! scalars, empty backing collections, mis-sized coefficient vectors,
//! and out-of-range structural parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Eager**: Checks run at the start of each public operation, before
//!   any state is mutated.
//! * **Generics**: Scalar validation is generic over `Float` types.
//! * **Cost**: Every check is O(1); validating several arguments is
//!   linear in the argument count, never in collection size.
//!
//! ## Key concepts
//!
//! * **Missing values**: A non-finite scalar (NaN/±inf) stands in for an
//!   absent value in a numeric stream and is rejected wherever a real
//!   value is mandatory.
//! * **Structural parameters**: Coefficient-vector lengths must equal
//!   their boundary coefficients; indices must lie inside their range.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct, clamp, or transform invalid inputs.
//! * This module does not perform any filtering itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FilterError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter parameters and streamed values.
///
/// Provides static methods returning `Result<(), FilterError>` that
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Require a scalar to be present, i.e. finite.
    pub fn require_finite<T: Float>(value: T, name: &'static str) -> Result<(), FilterError> {
        if !value.is_finite() {
            return Err(FilterError::MissingValue {
                name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Require every element of a coefficient vector to be finite.
    pub fn require_all_finite<T: Float>(
        values: &[T],
        name: &'static str,
    ) -> Result<(), FilterError> {
        for &value in values {
            Self::require_finite(value, name)?;
        }
        Ok(())
    }

    /// Require a backing collection to hold at least one element.
    pub fn require_non_empty<T>(values: &[T], name: &'static str) -> Result<(), FilterError> {
        if values.is_empty() {
            return Err(FilterError::EmptyCollection { name });
        }
        Ok(())
    }

    /// Require a collection's length to equal its boundary coefficient.
    pub fn require_size<T>(
        values: &[T],
        expected: usize,
        name: &'static str,
    ) -> Result<(), FilterError> {
        if values.len() != expected {
            return Err(FilterError::SizeMismatch {
                name,
                got: values.len(),
                expected,
            });
        }
        Ok(())
    }

    /// Require `value` to lie within the inclusive range `[lo, hi]`.
    pub fn require_in_range(value: usize, lo: usize, hi: usize) -> Result<(), FilterError> {
        if value < lo || value > hi {
            return Err(FilterError::OutOfRange {
                got: value,
                lo,
                hi,
            });
        }
        Ok(())
    }
}
