//! Hashing defaults.
use std::hash::BuildHasherDefault;

use zwohash::ZwoHasher;

/// The hasher used by the ordered collections unless another one is requested.
///
/// `ZwoHasher` is fast on small keys but is not resistant against collision attacks, so callers
/// hashing untrusted input should pass their own [`BuildHasher`](std::hash::BuildHasher) instead.
pub type DefaultBuildHasher = BuildHasherDefault<ZwoHasher>;
