//! Hero plugin.
//!
//! Pipeline:
//! - Update: sample keyboard, write `HeroInput`; trigger writes `FireRequest`
//! - FixedUpdate: apply velocity to the kinematic hero, stopping at the play-area edge
//!
//! Input resources are optional so every system is a no-op in headless apps.
//! The hero is reached through `Option<Single<..>>`: no hero (before spawn or
//! after the state exits) simply means nothing to do.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::messages::FireRequest;
use crate::plugins::projectiles::weapons::WeaponType;
use crate::plugins::shield;
use crate::plugins::world::PlayArea;

#[derive(Component)]
pub struct Hero;

/// Weapon the hero currently fires.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct HeroWeapon(pub WeaponType);

/// Hero shield strength. Fractional values are allowed; the indicator shows
/// the floored level.
#[derive(Resource, Debug, Clone, Copy)]
pub struct HeroShield {
    pub level: f32,
}

impl Default for HeroShield {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

#[derive(Resource, Default, Debug)]
struct HeroInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(HeroInput::default())
        .init_resource::<HeroShield>()
        .add_systems(OnEnter(GameState::Playing), spawn)
        .add_systems(
            Update,
            (gather_input, cycle_weapon, pull_trigger).run_if(in_state(GameState::Playing)),
        )
        .add_systems(FixedUpdate, apply_movement.run_if(in_state(GameState::Playing)));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>, area: Res<PlayArea>) {
    let layers = CollisionLayers::new(Layer::Hero, [Layer::Enemy]);
    let start = Vec2::new(0.0, area.bounds.min.y + 80.0);

    commands
        .spawn((
            Name::new("Hero"),
            Hero,
            HeroWeapon::default(),
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::splat(26.0)),
                ..default()
            },
            Transform::from_translation(start.extend(1.0)),
            RigidBody::Kinematic,
            Collider::circle(13.0),
            layers,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|hero| {
            hero.spawn(shield::indicator_bundle(&tunables));
        });
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<HeroInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn cycle_weapon(keys: Option<Res<ButtonInput<KeyCode>>>, hero: Option<Single<&mut HeroWeapon, With<Hero>>>) {
    let (Some(keys), Some(mut weapon)) = (keys, hero) else { return; };
    if !keys.just_pressed(KeyCode::KeyQ) { return; }
    weapon.0 = weapon.0.next();
    debug!("hero weapon switched to {:?}", weapon.0);
}

/// Producer: the hero never touches projectiles directly, it only asks.
fn pull_trigger(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    hero: Option<Single<(&Transform, &HeroWeapon), With<Hero>>>,
    mut writer: MessageWriter<FireRequest>,
) {
    let (Some(keys), Some(hero)) = (keys, hero) else { return; };
    if !keys.just_pressed(KeyCode::Space) { return; }
    let (tf, weapon) = *hero;

    writer.write(FireRequest {
        weapon: weapon.0,
        origin: tf.translation.truncate() + Vec2::Y * 18.0,
    });
}

/// Velocity from input, with outward components dropped at the play-area edge.
fn edge_limited_velocity(pos: Vec2, desired: Vec2, area: &PlayArea) -> Vec2 {
    let mut v = desired;
    if (pos.x <= area.bounds.min.x && v.x < 0.0) || (pos.x >= area.bounds.max.x && v.x > 0.0) {
        v.x = 0.0;
    }
    if (pos.y <= area.bounds.min.y && v.y < 0.0) || (pos.y >= area.bounds.max.y && v.y > 0.0) {
        v.y = 0.0;
    }
    v
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<HeroInput>,
    area: Res<PlayArea>,
    hero: Option<Single<(&Transform, &mut LinearVelocity), With<Hero>>>,
) {
    let Some(hero) = hero else {
        return;
    };
    let (tf, mut vel) = hero.into_inner();
    let desired = input.move_axis * tunables.hero_speed;
    vel.0 = edge_limited_velocity(tf.translation.truncate(), desired, &area);
}
