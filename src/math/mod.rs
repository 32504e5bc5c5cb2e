//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions with no filter
//! state. It depends only on the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Filters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binomial coefficient generation.
pub mod binomial;
