//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Hero,
    Enemy,
    HeroProjectile,
}

/// Layers for a live enemy part: hit by the hero and hero projectiles.
#[inline]
pub fn enemy_part_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Hero, Layer::HeroProjectile])
}

/// Layers for a destroyed part.
///
/// Membership stays "Enemy" but filters are empty, so the part stops
/// interacting without a structural change.
#[inline]
pub fn inert_enemy_part_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}
