//! Data models for proximity screening.
//!
//! A [`structure::Structure`] is a named, ordered, non-empty set of 3D atom
//! coordinates. A [`pool::StructurePool`] maps unique names to structures for
//! the duration of one screening request; it is built once per request and
//! never shared mutably across requests.

pub mod pool;
pub mod structure;
