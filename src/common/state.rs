//! Global state machine.

use bevy::prelude::*;

/// Gameplay systems run only while `Playing`; entities spawned for a run are
/// scoped to it with `DespawnOnExit(GameState::Playing)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
}
