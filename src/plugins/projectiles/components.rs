use bevy::prelude::*;

use super::weapons::WeaponType;

/// Tag for anything the hero fired. Only collisions involving one of these
/// are treated as damage.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub weapon: WeaponType,
}

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);
