//! Error types for filter operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while
//! constructing or running a filter, including input validation,
//! structural parameter constraints, and cascade stage conversions.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (e.g., actual vs.
//!   expected lengths, the offending scalar).
//! * **Recoverable**: Every variant is reported to the immediate caller;
//!   none is fatal to the process and no retry is performed internally.
//! * **No-std**: All payloads are `Copy`; no allocation is needed to
//!   build or match an error.
//! * **Trait implementation**: Implements `Display` and
//!   `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Missing values**: A mandatory scalar was absent. For a numeric
//!    stream, "absent" is represented by a non-finite value (NaN/±inf).
//! 2. **Structural validation**: Empty histories or coefficient vectors,
//!    length/boundary-coefficient mismatches, out-of-range parameters.
//! 3. **Cascade conversions**: A stage rejected the value type produced
//!    by the previous stage.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for filter construction and per-value operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// A mandatory scalar was absent (non-finite) where a value was required.
    MissingValue {
        /// Name of the offending input or collaborator.
        name: &'static str,
        /// The non-finite value that was rejected.
        value: f64,
    },

    /// An operation required at least one stored element but found none.
    EmptyCollection {
        /// Name of the empty history or coefficient vector.
        name: &'static str,
    },

    /// A coefficient vector's length does not equal its boundary coefficient.
    SizeMismatch {
        /// Name of the mis-sized vector.
        name: &'static str,
        /// Actual length.
        got: usize,
        /// Required length.
        expected: usize,
    },

    /// An index or size parameter lies outside its permitted range.
    OutOfRange {
        /// The value that was rejected.
        got: usize,
        /// Inclusive lower bound.
        lo: usize,
        /// Inclusive upper bound.
        hi: usize,
    },

    /// A cascade stage could not accept the value produced by the
    /// previous stage.
    TypeMismatch {
        /// Zero-based index of the rejecting stage; one past the last
        /// stage when the final output conversion fails.
        stage: usize,
        /// Type the stage expected to receive.
        expected: &'static str,
    },
}

impl FilterError {
    /// Attach a stage index to a cascade conversion failure.
    ///
    /// Leaves every other variant untouched so stage errors propagate
    /// with their original context.
    pub(crate) fn at_stage(self, stage: usize) -> Self {
        match self {
            Self::TypeMismatch { expected, .. } => Self::TypeMismatch { stage, expected },
            other => other,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingValue { name, value } => {
                write!(f, "Missing value: {name}={value} (must be finite)")
            }
            Self::EmptyCollection { name } => {
                write!(f, "Empty collection: {name} must hold at least one element")
            }
            Self::SizeMismatch {
                name,
                got,
                expected,
            } => {
                write!(
                    f,
                    "Size mismatch: {name} has {got} elements, expected {expected}"
                )
            }
            Self::OutOfRange { got, lo, hi } => {
                write!(f, "Out of range: {got} is not within [{lo}, {hi}]")
            }
            Self::TypeMismatch { stage, expected } => {
                write!(f, "Type mismatch at stage {stage}: expected {expected}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FilterError {}
