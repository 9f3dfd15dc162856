//! Enemies plugin: multi-part ships that wander between random waypoints and
//! come apart under fire.
//!
//! ```text
//! Update:          spawn_enemies_on_timer -> initialize_parts (PartBlueprints -> PartSet)
//! FixedUpdate:     move_enemies, tick_damage_flash
//! FixedPostUpdate: process_projectile_hits (after Avian collision events)
//! PostUpdate:      despawn_marked_enemies
//! ```
//!
//! Facts live in components: `PartSet` is gameplay truth, `DamageFlash` and
//! the part sprites are presentation derived from it. Removal is requested
//! with `PendingDespawn` and applied in `PostUpdate`; every mutating query
//! skips marked enemies so nothing touches a ship after it was shot down.

pub mod collision;
pub mod messages;
pub mod mover;
pub mod parts;
pub mod spawn;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::{rng::GameRng, state::GameState, tunables::Tunables};
use crate::plugins::world::PlayArea;

use self::messages::ShipDestroyed;
use self::mover::WaypointMover;
use self::parts::PartSet;
use self::spawn::{EnemyBlueprint, EnemySpawnTimer};

/// Colour a part shows while the damage flash is active.
pub const DAMAGE_TINT: Color = Color::srgb(1.0, 0.1, 0.1);

#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Marker: enemy should be removed from the world at the next safe point.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// On a part's child entity; remembers the colour to restore after a flash.
#[derive(Component, Debug, Clone, Copy)]
pub struct PartVisual {
    pub base_color: Color,
}

/// Enemy extent used for the on-screen test, relative to its translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyBounds {
    pub center_offset: Vec2,
    pub half_extents: Vec2,
}

impl EnemyBounds {
    pub fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::from_center_half_size(pos + self.center_offset, self.half_extents)
    }

    /// Zero-sized bounds count as off screen: nothing is visible yet.
    pub fn is_off_screen(&self, pos: Vec2, area: &PlayArea) -> bool {
        self.half_extents == Vec2::ZERO || area.is_fully_outside(self.rect_at(pos))
    }
}

/// Per-enemy countdown of fixed ticks left on the damage tint.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageFlash {
    pub remaining_ticks: u32,
}

impl DamageFlash {
    #[inline]
    pub fn arm(&mut self, ticks: u32) {
        self.remaining_ticks = ticks;
    }

    /// Count down one tick. Returns true on the tick the flash ends.
    #[inline]
    pub fn tick(&mut self) -> bool {
        if self.remaining_ticks == 0 {
            return false;
        }
        self.remaining_ticks -= 1;
        self.remaining_ticks == 0
    }
}

pub fn plugin(app: &mut App) {
    let interval = app
        .world()
        .get_resource::<Tunables>()
        .map_or(Tunables::default().enemy_spawn_interval_secs, |t| t.enemy_spawn_interval_secs);

    app.add_message::<ShipDestroyed>()
        .init_resource::<EnemyBlueprint>()
        .insert_resource(EnemySpawnTimer(Timer::from_seconds(interval, TimerMode::Repeating)));

    app.add_systems(
        Update,
        (spawn::spawn_enemies_on_timer, spawn::initialize_parts)
            .chain()
            .run_if(in_state(GameState::Playing)),
    );

    app.add_systems(
        FixedUpdate,
        (move_enemies, tick_damage_flash).run_if(in_state(GameState::Playing)),
    );

    app.add_systems(
        FixedPostUpdate,
        collision::process_projectile_hits
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::Playing)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_enemies.run_if(in_state(GameState::Playing)),
    );
}

/// Drive active enemies along their waypoint legs.
fn move_enemies(
    time: Res<Time>,
    area: Res<PlayArea>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    mut q: Query<(&mut WaypointMover, &mut Transform), (With<Enemy>, With<PartSet>, Without<PendingDespawn>)>,
) {
    let now = time.elapsed_secs();
    let padding = tunables.enemy_spawn_padding;

    for (mut mover, mut tf) in &mut q {
        let pos = mover.advance(now, || area.sample_inset(padding, &mut rng.0));
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
    }
}

/// Restore every part's base colour once the flash runs out.
fn tick_damage_flash(
    mut q_enemies: Query<(&mut DamageFlash, &PartSet), (With<Enemy>, Without<PendingDespawn>)>,
    mut q_visuals: Query<(&PartVisual, &mut Sprite)>,
) {
    for (mut flash, parts) in &mut q_enemies {
        if flash.remaining_ticks == 0 || !flash.tick() {
            continue;
        }
        for part in parts.iter() {
            if let Ok((visual, mut sprite)) = q_visuals.get_mut(part.visual()) {
                sprite.color = visual.base_color;
            }
        }
    }
}

/// Centralised structural cleanup.
fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, (With<Enemy>, With<PendingDespawn>)>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
