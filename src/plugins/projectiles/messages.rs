//! Buffered fire requests.
//!
//! Producers (the hero's trigger) write intent; the projectile plugin is the
//! single consumer that turns a request into spawned projectiles.

use bevy::prelude::*;

use super::weapons::WeaponType;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub weapon: WeaponType,
    pub origin: Vec2,
}
