//! # Core Module
//!
//! This module provides the fundamental building blocks for proximity
//! screening: immutable molecular structure models and the file I/O needed to
//! load them.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Named atom coordinate sets and
//!   the request-scoped pool that holds them
//! - **File I/O** ([`io`]) - Reading structure pools from MDL SDF files

pub mod io;
pub mod models;
