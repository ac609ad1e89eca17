//! Provides input functionality for molecular structure files.
//!
//! The screening engine is loader-agnostic: it consumes a
//! [`StructurePool`](crate::core::models::pool::StructurePool) regardless of
//! where it came from. This module defines the loader interface and an MDL
//! SDF (V2000) implementation, the format the screening front end submits.

pub mod sdf;
pub mod traits;
