use bevy::prelude::*;

use super::PlayArea;
use crate::common::rng::GameRng;

fn area() -> PlayArea {
    PlayArea::from_half_size(Vec2::new(100.0, 50.0))
}

#[test]
fn overlapping_rect_is_on_screen() {
    let r = Rect::from_center_half_size(Vec2::new(105.0, 0.0), Vec2::splat(10.0));
    assert!(!area().is_fully_outside(r));
}

#[test]
fn rect_above_top_edge_is_off_screen() {
    let r = Rect::from_center_half_size(Vec2::new(0.0, 80.0), Vec2::splat(10.0));
    assert!(area().is_fully_outside(r));
}

#[test]
fn rect_touching_edge_is_on_screen() {
    let r = Rect::from_center_half_size(Vec2::new(-110.0, 0.0), Vec2::splat(10.0));
    assert!(!area().is_fully_outside(r));
}

#[test]
fn samples_stay_inside_padding() {
    let mut rng = GameRng::seeded(42);
    let a = area();
    for _ in 0..2_000 {
        let p = a.sample_inset(20.0, &mut rng.0);
        assert!((-80.0..=80.0).contains(&p.x), "x out of range: {p:?}");
        assert!((-30.0..=30.0).contains(&p.y), "y out of range: {p:?}");
    }
}

#[test]
fn degenerate_axis_collapses_to_centre() {
    let mut rng = GameRng::seeded(1);
    let p = area().sample_inset(60.0, &mut rng.0);
    assert_eq!(p.y, 0.0);
    assert!((-40.0..=40.0).contains(&p.x));
}

#[test]
fn plugin_inserts_default_area() {
    let mut app = App::new();
    super::plugin(&mut app);
    assert_eq!(*app.world().resource::<PlayArea>(), PlayArea::default());
}
