//! Projectile hits on multi-part enemies.
//!
//! Resolution order for one `CollisionStart` involving a hero projectile:
//! 1. off-screen gate: the shot is discarded without damage
//! 2. which part was hit (enemy-side collider first, then the other side);
//!    no match means the event is not about a tracked part and is ignored
//! 3. protection: a live protector absorbs the shot
//! 4. damage from the weapon table; destroyed parts are hidden and go inert
//! 5. tint the hit part for a few ticks
//! 6. last part destroyed: report `ShipDestroyed` once and mark for despawn
//!
//! The projectile is consumed by every branch except (2).

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::inert_enemy_part_layers;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::Projectile;
use crate::plugins::projectiles::weapons::WeaponDefinitions;
use crate::plugins::world::PlayArea;

use super::messages::{DestructionCause, ShipDestroyed};
use super::parts::{HitOutcome, PartSet};
use super::{DAMAGE_TINT, DamageFlash, Enemy, EnemyBounds, PartVisual, PendingDespawn};

#[derive(Clone, Copy, Debug)]
struct CollisionSide {
    collider: Entity,
    body: Option<Entity>,
}

#[inline]
fn sides(ev: &CollisionStart) -> (CollisionSide, CollisionSide) {
    (
        CollisionSide { collider: ev.collider1, body: ev.body1 },
        CollisionSide { collider: ev.collider2, body: ev.body2 },
    )
}

type LiveEnemy = (With<Enemy>, Without<PendingDespawn>);

pub fn process_projectile_hits(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    weapons: Res<WeaponDefinitions>,
    area: Res<PlayArea>,
    tunables: Res<Tunables>,
    q_projectiles: Query<&Projectile>,
    q_child_of: Query<&ChildOf>,
    mut q_enemies: Query<(&Transform, &EnemyBounds, &mut PartSet, &mut DamageFlash), LiveEnemy>,
    mut q_visuals: Query<(&mut Sprite, &mut Visibility, &mut CollisionLayers), With<PartVisual>>,
    mut destroyed: MessageWriter<ShipDestroyed>,
    // One resolution per projectile per step, even if it overlaps two parts.
    mut spent: Local<HashSet<Entity>>,
) {
    spent.clear();

    for ev in started.read() {
        let (s1, s2) = sides(ev);
        let (shot, target) = if q_projectiles.contains(s1.collider) {
            (s1, s2)
        } else if q_projectiles.contains(s2.collider) {
            (s2, s1)
        } else {
            continue;
        };
        if spent.contains(&shot.collider) {
            continue;
        }
        let Ok(projectile) = q_projectiles.get(shot.collider) else {
            continue;
        };

        // The enemy is the rigid body owning the part collider; fall back to
        // the hierarchy when the event carries no body.
        let parent = q_child_of.get(target.collider).ok().map(|c| c.parent());
        let Some(enemy) = [target.body, Some(target.collider), parent]
            .into_iter()
            .flatten()
            .find(|&e| q_enemies.contains(e))
        else {
            continue;
        };
        let Ok((tf, bounds, mut parts, mut flash)) = q_enemies.get_mut(enemy) else {
            continue;
        };

        if bounds.is_off_screen(tf.translation.truncate(), &area) {
            debug!("discarding shot at off-screen enemy {enemy}");
            spent.insert(shot.collider);
            commands.entity(shot.collider).try_despawn();
            continue;
        }

        let Some(part) = parts
            .by_visual(target.collider)
            .or_else(|| parts.by_visual(shot.collider))
        else {
            continue;
        };

        spent.insert(shot.collider);
        commands.entity(shot.collider).try_despawn();

        let Some(weapon) = weapons.get(projectile.weapon) else {
            warn!("no weapon definition for {:?}; shot ignored", projectile.weapon);
            continue;
        };

        let visual = parts.get(part).visual();
        let outcome = parts.apply_hit(part, weapon.damage_on_hit);
        match outcome {
            HitOutcome::Absorbed | HitOutcome::AlreadyDestroyed => continue,
            HitOutcome::Damaged { .. } => {}
            HitOutcome::Destroyed => {
                if let Ok((_, mut vis, mut layers)) = q_visuals.get_mut(visual) {
                    *vis = Visibility::Hidden;
                    *layers = inert_enemy_part_layers();
                }
                debug!("enemy {enemy}: part '{}' destroyed", parts.get(part).name());
            }
        }

        if let Ok((mut sprite, _, _)) = q_visuals.get_mut(visual) {
            sprite.color = DAMAGE_TINT;
        }
        flash.arm(tunables.show_damage_for_ticks);

        if outcome == HitOutcome::Destroyed && parts.all_destroyed() {
            info!("enemy {enemy} shot down");
            destroyed.write(ShipDestroyed { enemy, cause: DestructionCause::Normal });
            commands.entity(enemy).insert(PendingDespawn);
        }
    }
}
