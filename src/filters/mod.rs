//! Layer 4: Filters
//!
//! # Purpose
//!
//! This layer holds the concrete filter algorithms: the linear
//! difference-equation engine, its FIR-family specializations, and the
//! rolling and unbounded aggregate filters.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Filters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear difference-equation engine.
pub mod linear;

/// FIR, gain, and binomial specializations.
pub mod fir;

/// Unbounded and windowed averaging filters.
pub mod average;

/// Unbounded and windowed extremum filters.
pub mod extrema;
