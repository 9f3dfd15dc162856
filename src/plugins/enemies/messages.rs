//! Reports from enemies to the game director.

use bevy::prelude::*;

/// Why a ship was removed. Only shoot-downs exist today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DestructionCause {
    #[default]
    Normal,
}

/// Written exactly once when the last part of an enemy is destroyed.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipDestroyed {
    pub enemy: Entity,
    pub cause: DestructionCause,
}
