//! # Hitscreen Core Library
//!
//! A small, focused library for proximity screening of 3D molecular structures:
//! given a pool of named structures and one designated target, report every
//! structure with at least one atom within a distance threshold of any target
//! atom.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   ([`Structure`](core::models::structure::Structure),
//!   [`StructurePool`](core::models::pool::StructurePool)) and I/O utilities
//!   for loading structure pools from SDF files.
//!
//! - **[`engine`]: The Logic Core.** Implements the screening computation: the
//!   masked inter-structure distance matrix, the minimum-distance reduction,
//!   and the threshold filter, together with progress reporting and typed
//!   error handling.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It validates requests, invokes the engine, classifies failures
//!   (user fault, ineffective settings, internal fault), and packages outcomes
//!   into a front-end-ready response envelope.

pub mod core;
pub mod engine;
pub mod workflows;
