//! Shield indicator: a spinning sprite on the hero whose frame tracks the
//! floored `HeroShield` level.
//!
//! The texture is a horizontal strip with one frame per level; a level change
//! moves the sampled rect by `uv_step` of the strip width. Rotation is
//! recomputed from elapsed time every frame, so it never drifts.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::player::HeroShield;

/// Pixel size of the whole strip texture.
pub const SHIELD_SHEET_SIZE: Vec2 = Vec2::new(320.0, 64.0);
const SHIELD_DISPLAY_SIZE: Vec2 = Vec2::splat(44.0);

#[derive(Component, Debug, Clone)]
pub struct ShieldIndicator {
    pub rotations_per_second: f32,
    pub uv_step: f32,
    pub level_shown: i32,
}

impl ShieldIndicator {
    pub fn new(rotations_per_second: f32, uv_step: f32) -> Self {
        Self { rotations_per_second, uv_step, level_shown: 0 }
    }

    /// Record the floored shield level. Returns true when the shown level changed.
    pub fn observe(&mut self, shield_level: f32) -> bool {
        let level = shield_level.floor() as i32;
        if level == self.level_shown {
            return false;
        }
        self.level_shown = level;
        true
    }

    /// Texture offset in UV units for the shown level.
    pub fn texture_offset(&self) -> Vec2 {
        Vec2::new(self.uv_step * self.level_shown as f32, 0.0)
    }

    /// Pixel rect of the strip frame for the shown level.
    pub fn frame_rect(&self) -> Rect {
        let min = self.texture_offset() * SHIELD_SHEET_SIZE;
        let size = Vec2::new(self.uv_step * SHIELD_SHEET_SIZE.x, SHIELD_SHEET_SIZE.y);
        Rect::from_corners(min, min + size)
    }
}

/// Spin angle in degrees, wrapped to `[0, 360)`.
#[inline]
pub fn spin_degrees(rotations_per_second: f32, now: f32) -> f32 {
    (rotations_per_second * now * 360.0).rem_euclid(360.0)
}

/// Components for a shield indicator; spawned as a child of the hero.
pub fn indicator_bundle(tunables: &Tunables) -> impl Bundle {
    let indicator = ShieldIndicator::new(tunables.shield_rotations_per_second, tunables.shield_uv_step);
    let rect = indicator.frame_rect();
    (
        Name::new("ShieldIndicator"),
        Sprite {
            color: Color::srgba(0.5, 0.8, 1.0, 0.45),
            custom_size: Some(SHIELD_DISPLAY_SIZE),
            rect: Some(rect),
            ..default()
        },
        indicator,
        Transform::from_xyz(0.0, 0.0, 0.5),
    )
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        update_shield_indicator.run_if(in_state(GameState::Playing)),
    );
}

fn update_shield_indicator(
    time: Res<Time>,
    hero_shield: Res<HeroShield>,
    mut q: Query<(&mut ShieldIndicator, &mut Sprite, &mut Transform)>,
) {
    let now = time.elapsed_secs();

    for (mut indicator, mut sprite, mut tf) in &mut q {
        if indicator.observe(hero_shield.level) {
            sprite.rect = Some(indicator.frame_rect());
        }

        let degrees = spin_degrees(indicator.rotations_per_second, now);
        tf.rotation = Quat::from_rotation_z(degrees.to_radians());
    }
}
