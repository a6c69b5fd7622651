//! Seedable random source.
//!
//! All randomness in the crate flows through an explicit `&mut R: Rng`
//! handle. This module is the one place that constructs it.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
///
/// The same seed always yields the same stream on every platform.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
