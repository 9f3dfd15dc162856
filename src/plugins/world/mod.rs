//! World plugin: the visible play area.
//!
//! `PlayArea` is the single answer to "what is on screen". The camera plugin
//! keeps it in sync with the main camera when rendering; headless apps keep
//! the default extents.

use bevy::prelude::*;
use rand::Rng;

const DEFAULT_HALF_W: f32 = 360.0;
const DEFAULT_HALF_H: f32 = 480.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub bounds: Rect,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::from_half_size(Vec2::new(DEFAULT_HALF_W, DEFAULT_HALF_H))
    }
}

impl PlayArea {
    pub fn from_half_size(half: Vec2) -> Self {
        Self { bounds: Rect::from_center_half_size(Vec2::ZERO, half) }
    }

    /// True when `r` does not overlap the visible area at all.
    ///
    /// Touching an edge still counts as on screen.
    pub fn is_fully_outside(&self, r: Rect) -> bool {
        r.max.x < self.bounds.min.x
            || r.min.x > self.bounds.max.x
            || r.max.y < self.bounds.min.y
            || r.min.y > self.bounds.max.y
    }

    /// Uniform point inside the area shrunk by `padding` on every side.
    ///
    /// Each axis is sampled independently. An axis with no room left after the
    /// inset collapses to the centre.
    pub fn sample_inset<R: Rng + ?Sized>(&self, padding: f32, rng: &mut R) -> Vec2 {
        Vec2::new(
            sample_axis(self.bounds.min.x + padding, self.bounds.max.x - padding, rng),
            sample_axis(self.bounds.min.y + padding, self.bounds.max.y - padding, rng),
        )
    }
}

#[inline]
fn sample_axis<R: Rng + ?Sized>(lo: f32, hi: f32, rng: &mut R) -> f32 {
    if lo < hi { rng.gen_range(lo..hi) } else { (lo + hi) * 0.5 }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayArea>();
}

#[cfg(test)]
mod tests;
