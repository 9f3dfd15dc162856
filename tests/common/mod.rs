//! Shared setup for the integration tests.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

/// A windowless app running the full gameplay stack.
///
/// Avian's collider plugins depend on the asset and scene infrastructure,
/// which `MinimalPlugins` leaves out.
pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default(), ScenePlugin));
    bevy_shmup::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` by hand.
    app.finish();
    app.cleanup();
    app
}
