//! `bevy_shmup`: a vertical shooter slice built on Bevy and Avian2D.
//!
//! The binary only calls [`game::run`]; everything else is exposed so the
//! integration tests under `tests/` can assemble their own apps.

pub mod common;
pub mod game;
pub mod plugins;
