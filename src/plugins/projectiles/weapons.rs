//! Weapon definitions: the shared, read-only damage table.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WeaponType {
    #[default]
    Blaster,
    Spread,
}

impl WeaponType {
    pub fn next(self) -> Self {
        match self {
            Self::Blaster => Self::Spread,
            Self::Spread => Self::Blaster,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WeaponDefinition {
    pub damage_on_hit: f32,
    /// Pixels per second.
    pub speed: f32,
    pub color: Color,
    /// Angles (radians, from straight up) of each projectile in one volley.
    pub volley: Vec<f32>,
}

#[derive(Resource, Debug, Clone)]
pub struct WeaponDefinitions(HashMap<WeaponType, WeaponDefinition>);

impl WeaponDefinitions {
    pub fn empty() -> Self {
        Self(HashMap::default())
    }

    pub fn with(mut self, kind: WeaponType, def: WeaponDefinition) -> Self {
        self.0.insert(kind, def);
        self
    }

    pub fn get(&self, kind: WeaponType) -> Option<&WeaponDefinition> {
        self.0.get(&kind)
    }
}

impl Default for WeaponDefinitions {
    fn default() -> Self {
        Self::empty()
            .with(
                WeaponType::Blaster,
                WeaponDefinition {
                    damage_on_hit: 1.0,
                    speed: 900.0,
                    color: Color::srgb(1.0, 0.85, 0.3),
                    volley: vec![0.0],
                },
            )
            .with(
                WeaponType::Spread,
                WeaponDefinition {
                    damage_on_hit: 1.0,
                    speed: 800.0,
                    color: Color::srgb(0.4, 1.0, 0.5),
                    volley: vec![-0.25, 0.0, 0.25],
                },
            )
    }
}
