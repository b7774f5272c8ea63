//! Ordered Collections - Shared Utility Code
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

pub mod fmt;
pub mod hash;

pub use hash::DefaultBuildHasher;
