//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.init_resource::<GameRng>();
    app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.06)));
}
