//! Camera plugin (render-only).
//!
//! A fixed 2D camera. Its orthographic area is what the player sees, so it
//! is mirrored into `PlayArea` whenever it changes (window resize, scaling).
//! The mirror runs after Bevy recomputes the projection area and the camera
//! transform, so `PlayArea` matches the frame being drawn.

use bevy::camera::CameraUpdateSystems;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::world::PlayArea;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_camera)
        .add_systems(
            PostUpdate,
            sync_play_area
                .after(CameraUpdateSystems)
                .after(TransformSystems::Propagate)
                .run_if(in_state(GameState::Playing)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::Playing),
    ));
}

/// World-space rectangle covered by an orthographic camera.
fn visible_rect(projection: &Projection, camera_tf: &GlobalTransform) -> Option<Rect> {
    let Projection::Orthographic(ortho) = projection else {
        return None;
    };
    let center = camera_tf.translation().truncate();
    let area = Rect { min: ortho.area.min + center, max: ortho.area.max + center };
    (!area.is_empty()).then_some(area)
}

fn sync_play_area(
    q_cam: Query<(&Projection, &GlobalTransform), With<MainCamera>>,
    mut area: ResMut<PlayArea>,
) {
    let Ok((projection, tf)) = q_cam.single() else {
        return;
    };
    let Some(visible) = visible_rect(projection, tf) else {
        return;
    };
    if area.bounds != visible {
        area.bounds = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::run_system_once;

    fn camera_with_area(world: &mut World, area: Rect, at: Vec3) {
        let mut ortho = OrthographicProjection::default_2d();
        ortho.area = area;
        world.spawn((MainCamera, Projection::Orthographic(ortho), GlobalTransform::from_translation(at)));
    }

    #[test]
    fn play_area_follows_camera_area_and_position() {
        let mut world = World::new();
        world.insert_resource(PlayArea::default());
        camera_with_area(&mut world, Rect::new(-100.0, -50.0, 100.0, 50.0), Vec3::new(10.0, 0.0, 999.0));

        run_system_once(&mut world, sync_play_area);

        assert_eq!(world.resource::<PlayArea>().bounds, Rect::new(-90.0, -50.0, 110.0, 50.0));
    }

    #[test]
    fn empty_projection_area_keeps_previous_play_area() {
        let mut world = World::new();
        world.insert_resource(PlayArea::default());
        camera_with_area(&mut world, Rect::default(), Vec3::ZERO);

        run_system_once(&mut world, sync_play_area);

        assert_eq!(*world.resource::<PlayArea>(), PlayArea::default());
    }
}
