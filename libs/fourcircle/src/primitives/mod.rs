//! Shared geometric primitives.
//!
//! Every construction step depends on this module rather than carrying its
//! own intersection routines.

pub mod intersect;
