//! # Workflows Module
//!
//! High-level entry points that tie the [`core`](crate::core) and
//! [`engine`](crate::engine) layers together for end users.
//!
//! ## Architecture
//!
//! - **Screening Workflow** ([`screen`]) - Validates a screening request,
//!   runs the neighbor filter, and classifies every failure into a closed
//!   fault taxonomy (user input, ineffective settings, internal)
//! - **Response Envelope** ([`response`]) - Serializes a workflow outcome
//!   into the structured payload a front end consumes

pub mod response;
pub mod screen;
