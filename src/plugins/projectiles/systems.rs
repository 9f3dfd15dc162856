use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

use super::components::{Lifetime, Projectile};
use super::messages::FireRequest;
use super::weapons::WeaponDefinitions;

const PROJECTILE_SIZE: Vec2 = Vec2::new(4.0, 12.0);

/// Consumer: spawn one volley per fire request.
///
/// Projectiles are dynamic sensors: they report `CollisionStart` against enemy
/// parts without pushing them around.
pub fn spawn_requested_projectiles(
    mut commands: Commands,
    mut requests: MessageReader<FireRequest>,
    weapons: Res<WeaponDefinitions>,
    tunables: Res<Tunables>,
) {
    for req in requests.read() {
        let Some(def) = weapons.get(req.weapon) else {
            warn!("no weapon definition for {:?}, dropping fire request", req.weapon);
            continue;
        };

        for &angle in &def.volley {
            let dir = Vec2::from_angle(angle).rotate(Vec2::Y);
            commands.spawn((
                Name::new("HeroProjectile"),
                Projectile { weapon: req.weapon },
                Lifetime(Timer::from_seconds(tunables.projectile_lifetime_secs, TimerMode::Once)),
                Sprite { color: def.color, custom_size: Some(PROJECTILE_SIZE), ..default() },
                Transform::from_translation(req.origin.extend(2.0))
                    .with_rotation(Quat::from_rotation_z(angle)),
                RigidBody::Dynamic,
                Collider::rectangle(PROJECTILE_SIZE.x, PROJECTILE_SIZE.y),
                Sensor,
                CollisionLayers::new(Layer::HeroProjectile, [Layer::Enemy]),
                LinearVelocity(dir * def.speed),
                // Avian only emits CollisionStart if one collider opts in.
                CollisionEventsEnabled,
                DespawnOnExit(GameState::Playing),
            ));
        }
    }
}

pub fn projectile_lifetime(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).try_despawn();
        }
    }
}
