//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub hero_speed: f32,
    pub projectile_lifetime_secs: f32,
    /// Inset from each edge of the play area when picking enemy waypoints.
    pub enemy_spawn_padding: f32,
    pub enemy_spawn_interval_secs: f32,
    /// Seconds per waypoint leg.
    pub enemy_leg_duration: f32,
    /// Fixed ticks a hit part stays tinted.
    pub show_damage_for_ticks: u32,
    pub shield_rotations_per_second: f32,
    /// Texture-offset step per shield level (fraction of the strip width).
    pub shield_uv_step: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            hero_speed: 420.0,
            projectile_lifetime_secs: 2.0,
            enemy_spawn_padding: 48.0,
            enemy_spawn_interval_secs: 4.0,
            enemy_leg_duration: 4.0,
            show_damage_for_ticks: 2,
            shield_rotations_per_second: 0.1,
            shield_uv_step: 0.2,
        }
    }
}
