//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer composes the concrete filters into larger processing
//! structures. Its single member is the cascade, which pipes values
//! through an ordered list of heterogeneous stages.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Filters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cascade composition of heterogeneous filters.
pub mod cascade;
