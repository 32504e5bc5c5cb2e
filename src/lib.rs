//! # streamfilt — composable streaming scalar filters
//!
//! A framework for stateful scalar filters that consume one value at a
//! time: a general difference-equation engine (subsuming FIR, gain, and
//! binomial filters), rolling and unbounded aggregates (average, min,
//! max), and a cascade mechanism that chains heterogeneous filters with
//! checked conversions at every stage boundary.
//!
//! ## Quick start
//!
//! ### Rolling aggregates
//!
//! ```rust
//! use streamfilt::prelude::*;
//!
//! let mut rolling = AveragingFilterN::<f64>::new(3);
//! for value in [1.0, 2.0, 3.0, 4.0] {
//!     rolling.filter(value)?;
//! }
//! // Window now holds [2.0, 3.0, 4.0].
//! assert_eq!(rolling.base_average(), 3.0);
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ### Difference-equation filtering
//!
//! ```rust
//! use streamfilt::prelude::*;
//!
//! // y(i) = 0.5*x(i) + 0.5*x(i-1)
//! let mut fir = FirFilter::new(2, vec![0.5, 0.5])?;
//! assert_eq!(fir.filter(4.0)?, 2.0);
//! assert_eq!(fir.filter(8.0)?, 6.0);
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ### Cascades
//!
//! ```rust
//! use streamfilt::prelude::*;
//!
//! let mut cascade = CascadeBuilder::new()
//!     .stage(AveragingFilter::<f64>::new())
//!     .stage(GainFilter::new(2.0)?)
//!     .stage(MaxFilter::<f64>::new())
//!     .build()?;
//!
//! let output: f64 = cascade.filter(3.0)?;
//! assert_eq!(output, 6.0);
//!
//! // Feeding an incompatible type reports a typed mismatch instead of
//! // an unrelated runtime fault.
//! let err = cascade.filter::<i64, f64>(3).unwrap_err();
//! assert!(matches!(err, FilterError::TypeMismatch { stage: 0, .. }));
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Every fallible operation returns [`prelude::FilterError`], a small
//! recoverable taxonomy: missing (non-finite) values, empty backing
//! collections, structural size mismatches, out-of-range parameters,
//! and cascade stage type mismatches. Validation is eager: faults are
//! detected at the start of each operation, before state is mutated.
//!
//! ## Concurrency
//!
//! The crate is single-threaded and synchronous. Filters mutate history
//! buffers and accumulators in place with no internal locking; sharing
//! one instance across threads requires external synchronization.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, traits, and history storage.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - the validation barrier.
mod engine;

// Layer 4: Filters - concrete filter algorithms.
mod filters;

// Layer 5: Adapters - cascade composition.
mod adapters;

// High-level fluent API.
mod api;

// Standard filter prelude.
pub mod prelude {
    pub use crate::api::{CascadeBuilder, CascadeStage, FilterCascade, LinearFilterBuilder};
    pub use crate::filters::average::{AveragingFilter, AveragingFilterN};
    pub use crate::filters::extrema::{MaxFilter, MaxFilterN, MinFilter, MinFilterN};
    pub use crate::filters::fir::{BinomialFilter, FirFilter, GainFilter};
    pub use crate::filters::linear::LinearDifferenceFilter;
    pub use crate::primitives::errors::FilterError;
    pub use crate::primitives::traits::{Filter, Reset, ResetWith};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod filters {
        pub use crate::filters::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
