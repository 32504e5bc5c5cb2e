//! Bounded FIFO history of recently accepted inputs.
//!
//! ## Purpose
//!
//! This module provides the sliding-window storage used by the rolling
//! aggregate filters: a buffer that retains at most the last `N`
//! accepted values, evicting the oldest element once capacity is
//! reached.
//!
//! ## Design notes
//!
//! * **Storage**: Backed by a `VecDeque` so eviction at the front and
//!   insertion at the back are both O(1).
//! * **Eviction order**: Eviction happens before insertion, so the
//!   length after a push at capacity is exactly `N`.
//! * **Displaced elements**: `push` returns the displaced element so
//!   callers maintaining incremental accumulators can fold it out.
//!
//! ## Invariants
//!
//! * Length never exceeds capacity.
//! * Elements are ordered oldest to newest.
//!
//! ## Non-goals
//!
//! * No random-access mutation; values enter through `push` only.
//! * No aggregate computation; that belongs to the filters layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// ============================================================================
// Windowed History
// ============================================================================

/// A bounded FIFO buffer of the last `N` accepted values.
///
/// A capacity of zero is a legal degenerate configuration: every pushed
/// value is discarded immediately and the buffer stays perpetually
/// empty. Callers that need to read back values must handle that case
/// explicitly.
#[derive(Debug, Clone)]
pub struct WindowedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> WindowedHistory<T> {
    /// Create an empty history retaining at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `value`, evicting the oldest element first when at
    /// capacity. Returns the displaced element, or the value itself
    /// when capacity is zero.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(value);
        evicted
    }

    /// Remove and return the oldest element.
    pub fn pop_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The oldest retained element.
    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }

    /// The most recently retained element.
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate over retained elements, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of retained elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no elements are retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the next push will evict.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Maximum number of retained elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all history instantly.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
