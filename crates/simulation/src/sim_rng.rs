//! Deterministic simulation RNG resource.
//!
//! Wraps `ChaCha8Rng` so all snowfall randomness flows through a single
//! shared generator. Systems take `ResMut<SimRng>` instead of
//! `rand::thread_rng()`; core update methods accept `&mut impl Rng`, so a
//! fixed seed reproduces the exact same flurry in tests.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shared RNG resource for all simulation randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        // Every run gets its own flurry; tests use `from_seed_u64`.
        Self(ChaCha8Rng::seed_from_u64(rand::random()))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
