//! Game director: the collaborator that hears about destroyed ships.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::enemies::messages::{DestructionCause, ShipDestroyed};

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub ships_destroyed: u32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Scoreboard>().add_systems(
        Update,
        tally_destroyed_ships.run_if(in_state(GameState::Playing)),
    );
}

pub fn tally_destroyed_ships(mut reader: MessageReader<ShipDestroyed>, mut score: ResMut<Scoreboard>) {
    for report in reader.read() {
        match report.cause {
            DestructionCause::Normal => score.ships_destroyed += 1,
        }
        info!("ship {} destroyed ({:?}); total {}", report.enemy, report.cause, score.ships_destroyed);
    }
}
