//! Feature plugins, grouped by whether they need a render backend.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod director;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod shield;
pub mod world;

// Needs DefaultPlugins.
pub mod camera;

/// Everything the simulation needs. Order matters for `core`, which inserts
/// the `Tunables` read by `physics` at build time.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    app.add_plugins(ProjectilesPlugin);
    enemies::plugin(app);
    shield::plugin(app);
    director::plugin(app);
}

pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
