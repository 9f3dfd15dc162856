//! Enemy layouts, the spawn timer, and part initialisation.
//!
//! A freshly spawned enemy carries `PartBlueprints` and named child entities.
//! `initialize_parts` turns the blueprints into a validated `PartSet`; only
//! then does the enemy move or take damage. A layout that fails validation
//! is logged and despawned.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::enemy_part_layers, rng::GameRng, state::GameState, tunables::Tunables};
use crate::plugins::world::PlayArea;

use super::mover::WaypointMover;
use super::parts::{PartBlueprint, PartSet};
use super::{DamageFlash, Enemy, EnemyBounds, PartVisual};

/// Declared parts of an enemy that has not been initialised yet.
#[derive(Component, Debug, Clone)]
pub struct PartBlueprints(pub Vec<PartBlueprint>);

#[derive(Debug, Clone)]
pub struct PartLayout {
    pub part: PartBlueprint,
    pub offset: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// Shape and parts of the enemy the spawner produces.
#[derive(Resource, Debug, Clone)]
pub struct EnemyBlueprint {
    pub name: String,
    pub parts: Vec<PartLayout>,
}

impl Default for EnemyBlueprint {
    fn default() -> Self {
        Self::gunship()
    }
}

impl EnemyBlueprint {
    /// Wings shield the fuselage, the fuselage shields the cockpit.
    pub fn gunship() -> Self {
        let hull = Color::srgb(0.55, 0.58, 0.66);
        let wing = Color::srgb(0.42, 0.45, 0.55);
        Self {
            name: "Gunship".into(),
            parts: vec![
                PartLayout {
                    part: PartBlueprint::new("Wing_L", 10.0),
                    offset: Vec2::new(-30.0, 0.0),
                    size: Vec2::new(28.0, 16.0),
                    color: wing,
                },
                PartLayout {
                    part: PartBlueprint::new("Wing_R", 10.0),
                    offset: Vec2::new(30.0, 0.0),
                    size: Vec2::new(28.0, 16.0),
                    color: wing,
                },
                PartLayout {
                    part: PartBlueprint::new("Fuselage", 20.0).protected_by(["Wing_L", "Wing_R"]),
                    offset: Vec2::ZERO,
                    size: Vec2::new(30.0, 44.0),
                    color: hull,
                },
                PartLayout {
                    part: PartBlueprint::new("Cockpit", 10.0).protected_by(["Fuselage"]),
                    offset: Vec2::new(0.0, -16.0),
                    size: Vec2::new(14.0, 14.0),
                    color: Color::srgb(0.3, 0.8, 0.95),
                },
            ],
        }
    }

    /// Union of all part rectangles, relative to the enemy origin.
    pub fn bounds(&self) -> EnemyBounds {
        let rect = self
            .parts
            .iter()
            .map(|p| Rect::from_center_size(p.offset, p.size))
            .reduce(|a, b| a.union(b))
            .unwrap_or_default();
        EnemyBounds { center_offset: rect.center(), half_extents: rect.half_size() }
    }
}

/// Spawn an enemy root with one named child per part.
pub fn spawn_enemy(
    commands: &mut Commands,
    blueprint: &EnemyBlueprint,
    at: Vec2,
    mover: WaypointMover,
) -> Entity {
    let blueprints = blueprint.parts.iter().map(|p| p.part.clone()).collect();

    commands
        .spawn((
            Name::new(blueprint.name.clone()),
            Enemy,
            PartBlueprints(blueprints),
            blueprint.bounds(),
            mover,
            DamageFlash::default(),
            Transform::from_translation(at.extend(1.0)),
            Visibility::Visible,
            RigidBody::Kinematic,
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|ship| {
            for layout in &blueprint.parts {
                ship.spawn((
                    Name::new(layout.part.name.clone()),
                    PartVisual { base_color: layout.color },
                    Sprite {
                        color: layout.color,
                        custom_size: Some(layout.size),
                        ..default()
                    },
                    Transform::from_translation(layout.offset.extend(0.0)),
                    Collider::rectangle(layout.size.x, layout.size.y),
                    enemy_part_layers(),
                ));
            }
        })
        .id()
}

#[derive(Resource, Debug, Deref, DerefMut)]
pub struct EnemySpawnTimer(pub Timer);

/// Spawn an enemy just above the visible area every interval.
///
/// The first target is picked immediately, so the ship flies on screen. A long
/// frame that spans several intervals spawns one enemy per interval.
pub fn spawn_enemies_on_timer(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<EnemySpawnTimer>,
    blueprint: Res<EnemyBlueprint>,
    area: Res<PlayArea>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
) {
    timer.tick(time.delta());
    let due = timer.times_finished_this_tick();
    if due == 0 {
        return;
    }

    let now = time.elapsed_secs();
    let padding = tunables.enemy_spawn_padding;
    let bounds = blueprint.bounds();
    let y = area.bounds.max.y + bounds.half_extents.y * 2.0 + padding;

    for _ in 0..due {
        let spawn_at = Vec2::new(area.sample_inset(padding, &mut rng.0).x, y);

        let mut mover = WaypointMover::new(spawn_at, tunables.enemy_leg_duration, now);
        mover.pick_new_target(now, area.sample_inset(padding, &mut rng.0));

        let e = spawn_enemy(&mut commands, &blueprint, spawn_at, mover);
        info!("spawned {} {e} at {spawn_at}", blueprint.name);
    }
}

/// Resolve declared parts against named children; activate or reject.
pub fn initialize_parts(
    mut commands: Commands,
    q_pending: Query<(Entity, &Name, &PartBlueprints, Option<&Children>), With<Enemy>>,
    q_names: Query<&Name>,
) {
    for (enemy, name, blueprints, children) in &q_pending {
        let find_visual = |part: &str| -> Option<Entity> {
            children?
                .iter()
                .find(|&child| q_names.get(child).is_ok_and(|n| n.as_str() == part))
        };

        match PartSet::resolve(&blueprints.0, find_visual) {
            Ok(parts) => {
                debug!("enemy {name} ({enemy}) active with {} parts", parts.count());
                commands.entity(enemy).remove::<PartBlueprints>().insert(parts);
            }
            Err(err) => {
                error!("rejecting enemy {name} ({enemy}): {err}");
                commands.entity(enemy).despawn();
            }
        }
    }
}
