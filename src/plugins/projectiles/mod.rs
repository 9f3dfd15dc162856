//! Projectiles plugin: message-based fire requests, lifetime, weapon table.
//!
//! ```text
//! Update:      hero trigger -> FireRequest -> spawn_requested_projectiles
//! FixedUpdate: projectile_lifetime (despawn after N seconds)
//! ```
//!
//! Hits are resolved by the enemies plugin; a projectile that hits anything
//! is consumed there.

pub mod components;
pub mod messages;
pub mod systems;
pub mod weapons;

use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<weapons::WeaponDefinitions>()
            .add_message::<messages::FireRequest>();

        app.add_systems(
            Update,
            systems::spawn_requested_projectiles.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            systems::projectile_lifetime.run_if(in_state(GameState::Playing)),
        );
    }
}
