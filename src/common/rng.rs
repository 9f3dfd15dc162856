//! Seedable random source shared by gameplay systems.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Injected instead of reaching for a thread-local generator, so tests can
/// pin a seed and replay waypoint sequences.
#[derive(Resource, Debug)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
