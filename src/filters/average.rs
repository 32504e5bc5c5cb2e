//! Unbounded and windowed averaging filters.
//!
//! ## Purpose
//!
//! This module provides the two mean-tracking filters: an unbounded
//! running average over every value seen, and a rolling average over
//! the last `N` accepted values.
//!
//! ## Design notes
//!
//! * **Incremental updates**: Both filters maintain the mean in O(1)
//!   per call. The windowed variant folds the evicted value out with
//!   `(mean*count - f)/(count-1)` and folds the new value in with
//!   `(mean*count + v)/(count+1)`, which is numerically equivalent
//!   (within floating tolerance) to recomputing the mean of the
//!   retained window.
//! * **Validate-then-mutate**: Input validation and the empty-window
//!   guard run before any state changes, so a failed call leaves the
//!   accumulators untouched.
//!
//! ## Invariants
//!
//! * The unbounded mean equals the arithmetic mean of all values since
//!   the last reset.
//! * The rolling mean equals the mean of exactly the values currently
//!   retained by the window.
//!
//! ## Non-goals
//!
//! * No weighting, decay, or robust (outlier-resistant) averaging.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::FilterError;
use crate::primitives::history::WindowedHistory;
use crate::primitives::traits::{Filter, Reset, ResetWith};

// ============================================================================
// Unbounded Average
// ============================================================================

/// A running average over every value filtered since the last reset.
#[derive(Debug, Clone)]
pub struct AveragingFilter<T: Float> {
    /// The mean of previously entered values.
    base_average: T,

    /// The count of entered values.
    count: usize,
}

impl<T: Float> AveragingFilter<T> {
    /// Construct a fresh running average.
    pub fn new() -> Self {
        Self {
            base_average: T::zero(),
            count: 0,
        }
    }

    /// The current mean.
    pub fn base_average(&self) -> T {
        self.base_average
    }

    /// Number of values folded into the mean.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: Float> Default for AveragingFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Filter for AveragingFilter<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;

        let count = T::from(self.count).unwrap();
        self.base_average = (self.base_average * count + value) / (count + T::one());
        self.count += 1;
        Ok(self.base_average)
    }
}

impl<T: Float> Reset for AveragingFilter<T> {
    fn reset(&mut self) {
        self.base_average = T::zero();
        self.count = 0;
    }
}

// ============================================================================
// Windowed Average
// ============================================================================

/// A rolling average over the last `N` accepted values.
#[derive(Debug, Clone)]
pub struct AveragingFilterN<T: Float> {
    /// The last `N` accepted values.
    window: WindowedHistory<T>,

    /// The mean of the retained values.
    base_average: T,
}

impl<T: Float> AveragingFilterN<T> {
    /// Construct a rolling average over a window of `n` values.
    pub fn new(n: usize) -> Self {
        Self {
            window: WindowedHistory::with_capacity(n),
            base_average: T::zero(),
        }
    }

    /// The current windowed mean.
    pub fn base_average(&self) -> T {
        self.base_average
    }

    /// Number of values currently retained.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window holds no values.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Fold the oldest value out of the mean and evict it.
    ///
    /// Errors with `EmptyCollection` when the window retains nothing,
    /// which is the perpetual state of the `n = 0` configuration.
    fn evict_oldest(&mut self) -> Result<(), FilterError> {
        let count = T::from(self.window.len()).unwrap();
        let first = self
            .window
            .pop_oldest()
            .ok_or(FilterError::EmptyCollection { name: "values" })?;
        // Evicting the sole element empties the window; the fold-out
        // formula would divide by zero there.
        self.base_average = if self.window.is_empty() {
            T::zero()
        } else {
            (self.base_average * count - first) / (count - T::one())
        };
        Ok(())
    }
}

impl<T: Float> Filter for AveragingFilterN<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;

        if self.window.is_full() {
            self.evict_oldest()?;
        }
        self.window.push(value);

        // Fold the appended value in; count is the size before append.
        let count = T::from(self.window.len() - 1).unwrap();
        self.base_average = (self.base_average * count + value) / (count + T::one());
        Ok(self.base_average)
    }
}

impl<T: Float> Reset for AveragingFilterN<T> {
    fn reset(&mut self) {
        self.window.clear();
        self.base_average = T::zero();
    }
}

impl<T: Float> ResetWith for AveragingFilterN<T> {
    /// Clear the window and seed it with the single value `value`.
    ///
    /// Errors with `EmptyCollection` when the window cannot retain the
    /// seed (the `n = 0` configuration), leaving the state untouched.
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        Validator::require_finite(value, "reset value")?;
        if self.window.capacity() == 0 {
            return Err(FilterError::EmptyCollection { name: "values" });
        }
        self.window.clear();
        self.window.push(value);
        self.base_average = value;
        Ok(())
    }
}
