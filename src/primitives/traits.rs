//! Capability traits for streaming filters.
//!
//! ## Purpose
//!
//! This module defines the capability contract every filter satisfies:
//! the per-value `filter` transform plus the optional reset capabilities.
//! Cascade composition is resolved statically where the element types are
//! known, and through a type-erased stage object (see the adapters layer)
//! where heterogeneous filters are chained.
//!
//! ## Design notes
//!
//! * **Associated types**: Input and output element types are associated
//!   types so a single blanket impl can type-erase any filter.
//! * **Split capabilities**: Not every filter supports both reset forms,
//!   so `Reset` and `ResetWith` are separate traits rather than default
//!   methods on `Filter`.
//! * **Mutation discipline**: `filter` takes `&mut self`; history buffers
//!   and accumulators are mutated in place with no internal locking.
//!
//! ## Invariants
//!
//! * `reset` restores a state observationally equivalent to a freshly
//!   constructed instance, and is idempotent.
//! * `reset_with` validates its seed before mutating any state.
//!
//! ## Non-goals
//!
//! * No concurrency: concurrent calls on one instance require external
//!   synchronization.
//! * No batch entry point; callers feed one value at a time.

// Internal dependencies
use crate::primitives::errors::FilterError;

// ============================================================================
// Filter
// ============================================================================

/// A stateful transformer that consumes one value at a time.
///
/// Each call may advance internal iteration counters, append to history
/// buffers, and update running accumulators. Validation failures are
/// detected eagerly and reported before any state is mutated.
pub trait Filter {
    /// Element type accepted by this filter.
    type Input;

    /// Element type produced by this filter.
    type Output;

    /// Filter a single value, producing the next output of the stream.
    fn filter(&mut self, value: Self::Input) -> Result<Self::Output, FilterError>;
}

// ============================================================================
// Reset Capabilities
// ============================================================================

/// Argumentless re-initialization to the freshly constructed state.
pub trait Reset {
    /// Clear all history and zero all accumulators.
    fn reset(&mut self);
}

/// Re-initialization seeded from a given value.
///
/// The meaning of the seed is filter-specific: the linear engine treats
/// it as a steady-state input held indefinitely, while rolling
/// aggregates re-seed their window with the single value.
pub trait ResetWith: Filter {
    /// Clear history and re-seed accumulators from `value`.
    fn reset_with(&mut self, value: Self::Input) -> Result<(), FilterError>;
}
