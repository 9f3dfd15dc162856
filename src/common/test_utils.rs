//! Helpers for unit tests that drive a bare `World`.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Runs `system` a single time against `world`.
///
/// Commands issued by the system are flushed before returning, so the caller
/// can assert on spawns, despawns and inserted components right away.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system could not be initialised");
    world.flush();
    out
}
