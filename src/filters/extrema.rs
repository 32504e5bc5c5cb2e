//! Unbounded and windowed extremum filters.
//!
//! ## Purpose
//!
//! This module provides the max/min tracking filters: unbounded
//! extrema over every value seen, and rolling extrema over the last
//! `N` accepted values.
//!
//! ## Design notes
//!
//! * **Asymmetric cost**: Unlike the sum-based rolling average, an
//!   eviction can remove the current extremum, so the windowed variants
//!   rescan the full window once per call (O(N), with N caller-bounded).
//!   The unbounded variants update in O(1) by comparison.
//! * **Absent extremum**: The unbounded filters hold `Option<T>`; the
//!   absent state is restored by `reset` and replaced by `reset_with`.
//!
//! ## Invariants
//!
//! * The windowed extremum equals the max/min of exactly the values
//!   currently retained by the window.
//! * Stored values are finite; comparisons never see NaN.
//!
//! ## Non-goals
//!
//! * No monotonic-deque optimization for the windowed variants; an
//!   O(N) rescan per call is acceptable at these window sizes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::FilterError;
use crate::primitives::history::WindowedHistory;
use crate::primitives::traits::{Filter, Reset, ResetWith};

// ============================================================================
// Unbounded Extrema
// ============================================================================

/// A running maximum over every value filtered since the last reset.
#[derive(Debug, Clone)]
pub struct MaxFilter<T: Float> {
    /// The maximum value found thus far.
    max: Option<T>,
}

impl<T: Float> MaxFilter<T> {
    /// Construct a fresh running maximum with no extremum.
    pub fn new() -> Self {
        Self { max: None }
    }

    /// The maximum value found thus far.
    pub fn max(&self) -> Option<T> {
        self.max
    }
}

impl<T: Float> Default for MaxFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Filter for MaxFilter<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;

        let max = match self.max {
            Some(max) => max.max(value),
            None => value,
        };
        self.max = Some(max);
        Ok(max)
    }
}

impl<T: Float> Reset for MaxFilter<T> {
    fn reset(&mut self) {
        self.max = None;
    }
}

impl<T: Float> ResetWith for MaxFilter<T> {
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        Validator::require_finite(value, "reset value")?;
        self.max = Some(value);
        Ok(())
    }
}

/// A running minimum over every value filtered since the last reset.
#[derive(Debug, Clone)]
pub struct MinFilter<T: Float> {
    /// The minimum value found thus far.
    min: Option<T>,
}

impl<T: Float> MinFilter<T> {
    /// Construct a fresh running minimum with no extremum.
    pub fn new() -> Self {
        Self { min: None }
    }

    /// The minimum value found thus far.
    pub fn min(&self) -> Option<T> {
        self.min
    }
}

impl<T: Float> Default for MinFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Filter for MinFilter<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;

        let min = match self.min {
            Some(min) => min.min(value),
            None => value,
        };
        self.min = Some(min);
        Ok(min)
    }
}

impl<T: Float> Reset for MinFilter<T> {
    fn reset(&mut self) {
        self.min = None;
    }
}

impl<T: Float> ResetWith for MinFilter<T> {
    fn reset_with(&mut self, value: T) -> Result<(), FilterError> {
        Validator::require_finite(value, "reset value")?;
        self.min = Some(value);
        Ok(())
    }
}

// ============================================================================
// Windowed Extrema
// ============================================================================

/// A rolling maximum over the last `N` accepted values.
#[derive(Debug, Clone)]
pub struct MaxFilterN<T: Float> {
    /// The last `N` accepted values.
    window: WindowedHistory<T>,
}

impl<T: Float> MaxFilterN<T> {
    /// Construct a rolling maximum over a window of `n` values.
    pub fn new(n: usize) -> Self {
        Self {
            window: WindowedHistory::with_capacity(n),
        }
    }

    /// Number of values currently retained.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window holds no values.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl<T: Float> Filter for MaxFilterN<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;

        self.window.push(value);
        scan_extremum(&self.window, T::max)
    }
}

impl<T: Float> Reset for MaxFilterN<T> {
    fn reset(&mut self) {
        self.window.clear();
    }
}

impl<T: Float> ResetWith for MaxFilterN<T> {
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
        Ok(())
    }
}

/// A rolling minimum over the last `N` accepted values.
#[derive(Debug, Clone)]
pub struct MinFilterN<T: Float> {
    /// The last `N` accepted values.
    window: WindowedHistory<T>,
}

impl<T: Float> MinFilterN<T> {
    /// Construct a rolling minimum over a window of `n` values.
    pub fn new(n: usize) -> Self {
        Self {
            window: WindowedHistory::with_capacity(n),
        }
    }

    /// Number of values currently retained.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window holds no values.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl<T: Float> Filter for MinFilterN<T> {
    type Input = T;
    type Output = T;

    fn filter(&mut self, value: T) -> Result<T, FilterError> {
        Validator::require_finite(value, "input")?;

        self.window.push(value);
        scan_extremum(&self.window, T::min)
    }
}

impl<T: Float> Reset for MinFilterN<T> {
    fn reset(&mut self) {
        self.window.clear();
    }
}

impl<T: Float> ResetWith for MinFilterN<T> {
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
        Ok(())
    }
}

// ============================================================================
// Window Scan
// ============================================================================

/// Rescan the full window for its extremum under `pick`.
///
/// Eviction can remove the previous extremum, so no incremental update
/// is possible; the scan visits every retained value.
fn scan_extremum<T: Float>(
    window: &WindowedHistory<T>,
    pick: fn(T, T) -> T,
) -> Result<T, FilterError> {
    let mut extremum = None;
    for &value in window.iter() {
        extremum = Some(match extremum {
            Some(current) => pick(current, value),
            None => value,
        });
    }
    extremum.ok_or(FilterError::EmptyCollection { name: "values" })
}
