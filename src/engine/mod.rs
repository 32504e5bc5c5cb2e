//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides the validation barrier shared by every filter.
//! All public operations validate through it before mutating state.
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;
