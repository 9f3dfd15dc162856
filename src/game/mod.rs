//! Wiring of the app.
//!
//! `configure_full` opens a window and adds the camera on top of the
//! gameplay plugins; `configure_headless` stops at gameplay so tests can run
//! it under `MinimalPlugins`.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;

const WINDOW_TITLE: &str = "Bevy Shmup";
// Portrait, like the arcade cabinets the genre comes from.
const WINDOW_SIZE: (u32, u32) = (720, 960);

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

fn primary_window() -> WindowPlugin {
    WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.into(),
            resolution: WindowResolution::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
            resizable: false,
            ..default()
        }),
        ..default()
    }
}

pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(primary_window()));
    configure_headless(app);
    plugins::register_render(app);
}

/// Gameplay only. The caller provides the runtime plugins.
pub fn configure_headless(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
