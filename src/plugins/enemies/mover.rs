//! Eased waypoint movement.
//!
//! An enemy travels in legs from `previous` to `next` over `duration`
//! seconds, decelerating into each waypoint. When a leg completes the mover
//! picks a new target and the entity sits at the new leg's start for that
//! tick instead of overshooting.

use bevy::prelude::*;

/// Shortest leg a mover accepts, in seconds.
pub const MIN_LEG_DURATION: f32 = 0.01;

/// `1 - (1-u)^2`: fast start, gentle arrival.
#[inline]
pub fn ease_out(u: f32) -> f32 {
    1.0 - (1.0 - u) * (1.0 - u)
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct WaypointMover {
    previous: Vec2,
    next: Vec2,
    start: f32,
    duration: f32,
}

impl WaypointMover {
    /// Both waypoints start at the spawn point.
    ///
    /// A duration below `MIN_LEG_DURATION` (or NaN) is raised to it and logged.
    pub fn new(spawn: Vec2, duration: f32, now: f32) -> Self {
        let duration = if duration >= MIN_LEG_DURATION {
            duration
        } else {
            warn!("leg duration {duration}s is too short; using {MIN_LEG_DURATION}s");
            MIN_LEG_DURATION
        };
        Self { previous: spawn, next: spawn, start: now, duration }
    }

    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    pub fn next(&self) -> Vec2 {
        self.next
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Begin a new leg from the current target towards `target`.
    pub fn pick_new_target(&mut self, now: f32, target: Vec2) {
        self.previous = self.next;
        self.next = target;
        self.start = now;
    }

    /// Position for `now`. `sample` is only called when a leg completes.
    pub fn advance(&mut self, now: f32, sample: impl FnOnce() -> Vec2) -> Vec2 {
        let mut u = ((now - self.start) / self.duration).max(0.0);
        if u >= 1.0 {
            self.pick_new_target(now, sample());
            u = 0.0;
        }
        self.previous.lerp(self.next, ease_out(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg() -> WaypointMover {
        let mut m = WaypointMover::new(Vec2::ZERO, 4.0, 0.0);
        m.pick_new_target(0.0, Vec2::new(100.0, -40.0));
        m
    }

    #[test]
    fn ease_out_endpoints_and_shape() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(0.5), 0.75);
    }

    #[test]
    fn new_mover_holds_spawn_point() {
        let mut m = WaypointMover::new(Vec2::new(3.0, 4.0), 2.0, 10.0);
        assert_eq!(m.advance(11.0, || panic!("leg not complete")), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn mid_leg_positions_are_strictly_between_and_monotone() {
        let mut m = leg();
        let target = m.next();
        let mut last_dist = f32::INFINITY;
        for i in 1..40 {
            let now = i as f32 * 0.1;
            let p = m.advance(now, || panic!("leg should not complete at {now}"));
            assert!(p.x > 0.0 && p.x < 100.0, "x not strictly inside at {now}: {p:?}");
            assert!(p.y < 0.0 && p.y > -40.0, "y not strictly inside at {now}: {p:?}");
            let dist = p.distance(target);
            assert!(dist < last_dist, "not approaching target at {now}");
            last_dist = dist;
        }
    }

    #[test]
    fn eased_position_matches_formula() {
        let mut m = leg();
        let p = m.advance(2.0, || unreachable!());
        assert!((p - Vec2::new(75.0, -30.0)).length() < 1e-4);
    }

    #[test]
    fn completed_leg_starts_new_leg_from_old_target() {
        let mut m = leg();
        let old_next = m.next();

        let p = m.advance(4.0, || Vec2::new(-50.0, 20.0));

        assert_eq!(m.previous(), old_next);
        assert_eq!(m.next(), Vec2::new(-50.0, 20.0));
        assert_eq!(m.start(), 4.0);
        assert_eq!(p, old_next);
    }

    #[test]
    fn degenerate_durations_fall_back_to_minimum() {
        for bad in [0.0, -3.0, f32::NAN] {
            let mut m = WaypointMover::new(Vec2::ZERO, bad, 0.0);
            assert_eq!(m.duration(), MIN_LEG_DURATION);

            m.pick_new_target(0.0, Vec2::new(10.0, 0.0));
            let p = m.advance(MIN_LEG_DURATION * 0.5, || unreachable!());
            assert!(p.is_finite() && p.x > 0.0 && p.x < 10.0);
        }
    }

    #[test]
    fn late_tick_restarts_leg_at_now() {
        let mut m = leg();
        m.advance(9.5, || Vec2::ONE);
        assert_eq!(m.start(), 9.5);
        let p = m.advance(11.5, || unreachable!());
        assert!((p - Vec2::new(100.0, -40.0).lerp(Vec2::ONE, 0.75)).length() < 1e-4);
    }
}
