//! Cascade composition of heterogeneous filters.
//!
//! ## Purpose
//!
//! This module chains an ordered, fixed list of filters so each stage's
//! output feeds the next stage's input. The list is assembled through
//! [`CascadeBuilder`] and is immutable once built; only the per-stage
//! internal state evolves as values flow through.
//!
//! ## Design notes
//!
//! * **Checked conversions**: Stage boundaries are crossed through a
//!   type-erased value with an explicit downcast at every stage. A
//!   conversion failure becomes a typed `TypeMismatch` carrying the
//!   stage index, never a silent wrong-type result.
//! * **Blanket stage impl**: Any `Filter + Reset` with `'static` element
//!   types is a cascade stage; no per-filter glue is needed.
//! * **Partial failure**: A mismatch at stage `k` leaves stages
//!   `0..k-1` already mutated. There is no rollback; callers that need
//!   a clean slate call `reset`.
//!
//! ## Invariants
//!
//! * The stage list is non-empty and fixed at construction.
//! * Stage states are disjoint; two cascades never share a filter.
//!
//! ## Non-goals
//!
//! * No stage insertion or removal after construction.
//! * No fan-out or branching topologies; composition is a single pipe.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

// External dependencies
use core::any::{type_name, Any};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::FilterError;
use crate::primitives::traits::{Filter, Reset};

// ============================================================================
// Cascade Stage
// ============================================================================

/// Object-safe capability used to thread type-erased values through a
/// cascade.
///
/// Implemented for every `Filter + Reset` whose element types are
/// `'static`, so heterogeneous concrete filters compose without glue.
pub trait CascadeStage {
    /// Filter a type-erased value, converting it to the stage's input
    /// type with a checked downcast.
    fn filter_dyn(&mut self, value: Box<dyn Any>) -> Result<Box<dyn Any>, FilterError>;

    /// Reset the stage to its freshly constructed state.
    fn reset_dyn(&mut self);

    /// Name of the stage's input type, for diagnostics.
    fn input_type(&self) -> &'static str;
}

impl<F> CascadeStage for F
where
    F: Filter + Reset,
    F::Input: 'static,
    F::Output: 'static,
{
    fn filter_dyn(&mut self, value: Box<dyn Any>) -> Result<Box<dyn Any>, FilterError> {
        let value = value.downcast::<F::Input>().map_err(|_| {
            // The cascade rewrites the stage index on propagation.
            FilterError::TypeMismatch {
                stage: 0,
                expected: type_name::<F::Input>(),
            }
        })?;
        let output = self.filter(*value)?;
        Ok(Box::new(output))
    }

    fn reset_dyn(&mut self) {
        self.reset();
    }

    fn input_type(&self) -> &'static str {
        type_name::<F::Input>()
    }
}

// ============================================================================
// Filter Cascade
// ============================================================================

/// An ordered pipeline of filters, each stage feeding the next.
pub struct FilterCascade {
    stages: Vec<Box<dyn CascadeStage>>,
}

impl FilterCascade {
    /// Thread `value` through every stage in list order and convert the
    /// final output to `B`.
    ///
    /// A conversion failure at stage `k` yields
    /// `TypeMismatch { stage: k, .. }` and no result; stages before `k`
    /// remain mutated.
    pub fn filter<A, B>(&mut self, value: A) -> Result<B, FilterError>
    where
        A: 'static,
        B: 'static,
    {
        let mut current: Box<dyn Any> = Box::new(value);
        for (index, stage) in self.stages.iter_mut().enumerate() {
            current = stage
                .filter_dyn(current)
                .map_err(|err| err.at_stage(index))?;
        }
        match current.downcast::<B>() {
            Ok(output) => Ok(*output),
            Err(_) => Err(FilterError::TypeMismatch {
                stage: self.stages.len(),
                expected: type_name::<B>(),
            }),
        }
    }

    /// Reset every stage to its freshly constructed state.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset_dyn();
        }
    }

    /// Number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline holds no stages. Always false for a built
    /// cascade.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Name of the first stage's input type.
    pub fn input_type(&self) -> Option<&'static str> {
        self.stages.first().map(|stage| stage.input_type())
    }
}

// ============================================================================
// Cascade Builder
// ============================================================================

/// Fluent builder assembling the fixed stage list of a [`FilterCascade`].
#[derive(Default)]
pub struct CascadeBuilder {
    stages: Vec<Box<dyn CascadeStage>>,
}

impl CascadeBuilder {
    /// Start an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the pipeline.
    pub fn stage<S: CascadeStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Finalize the pipeline.
    ///
    /// Fails with `EmptyCollection` when no stage was added.
    pub fn build(self) -> Result<FilterCascade, FilterError> {
        Validator::require_non_empty(&self.stages, "stages")?;
        Ok(FilterCascade {
            stages: self.stages,
        })
    }
}
