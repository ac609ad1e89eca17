//! # Engine Module
//!
//! This module implements the spatial neighbor screening computation: masked
//! inter-structure distance matrices, minimum-distance reduction, and
//! threshold filtering.
//!
//! ## Architecture
//!
//! - **Distance Engine** ([`distance`]) - Minimum Euclidean distance between
//!   two structures, computed over a self-masked augmented distance matrix
//! - **Neighbor Filter** ([`filter`]) - Per-candidate screening of a pool
//!   against a target, with inclusive threshold comparison
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//!   for long candidate pools
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Both core operations are stateless pure functions: candidates may be
//! evaluated in any order or in parallel (see the `parallel` cargo feature)
//! without synchronization, since structures are never mutated after
//! construction.

pub mod distance;
pub mod error;
pub mod filter;
pub mod progress;
