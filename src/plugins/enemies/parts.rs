//! Destructible parts of a multi-part enemy.
//!
//! Parts are declared by name (`PartBlueprint`) and resolved once, when the
//! enemy is initialised, into a `PartSet` indexed by `PartId`. Every name must
//! resolve to a child entity and every protection reference must name another
//! part of the same enemy; self-protection and cycles are rejected because
//! they would make a part permanently immune.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use thiserror::Error;

/// Stable index of a part within its `PartSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartId(usize);

/// Declared configuration of one part.
#[derive(Clone, Debug, PartialEq)]
pub struct PartBlueprint {
    pub name: String,
    pub health: f32,
    /// Names of parts that must be destroyed before this one takes damage.
    pub protected_by: Vec<String>,
}

impl PartBlueprint {
    pub fn new(name: impl Into<String>, health: f32) -> Self {
        Self { name: name.into(), health, protected_by: Vec::new() }
    }

    pub fn protected_by<I, S>(mut self, protectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected_by.extend(protectors.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartConfigError {
    #[error("enemy declares no parts")]
    NoParts,

    #[error("part '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("part '{name}' needs a positive starting health, got {health}")]
    NonPositiveHealth { name: String, health: f32 },

    #[error("part '{0}' has no child entity with that name")]
    MissingVisual(String),

    #[error("part '{part}' is protected by unknown part '{protector}'")]
    UnknownProtector { part: String, protector: String },

    #[error("part '{0}' lists itself as a protector")]
    SelfProtected(String),

    #[error("protection cycle through part '{0}'")]
    ProtectionCycle(String),
}

/// Result of applying one projectile hit to a part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitOutcome {
    /// At least one protector is still alive; nothing changed.
    Absorbed,
    /// The part was already destroyed; nothing changed.
    AlreadyDestroyed,
    Damaged { remaining: f32 },
    /// This hit took the part from alive to destroyed.
    Destroyed,
}

#[derive(Clone, Debug)]
pub struct Part {
    name: String,
    health: f32,
    protected_by: Vec<PartId>,
    visual: Entity,
}

impl Part {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    /// Child entity carrying this part's sprite and collider.
    pub fn visual(&self) -> Entity {
        self.visual
    }

    pub fn protected_by(&self) -> &[PartId] {
        &self.protected_by
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

/// Validated parts of an active enemy.
#[derive(Component, Clone, Debug)]
pub struct PartSet {
    parts: Vec<Part>,
}

impl PartSet {
    /// Resolve blueprints against the enemy's visual hierarchy.
    ///
    /// `find_visual` maps a declared name to the child entity with that name.
    pub fn resolve(
        blueprints: &[PartBlueprint],
        mut find_visual: impl FnMut(&str) -> Option<Entity>,
    ) -> Result<Self, PartConfigError> {
        if blueprints.is_empty() {
            return Err(PartConfigError::NoParts);
        }

        let mut index: HashMap<&str, PartId> = HashMap::default();
        let mut visuals = Vec::with_capacity(blueprints.len());
        for (i, bp) in blueprints.iter().enumerate() {
            if index.insert(bp.name.as_str(), PartId(i)).is_some() {
                return Err(PartConfigError::DuplicateName(bp.name.clone()));
            }
            if bp.health.is_nan() || bp.health <= 0.0 {
                return Err(PartConfigError::NonPositiveHealth {
                    name: bp.name.clone(),
                    health: bp.health,
                });
            }
            let visual =
                find_visual(&bp.name).ok_or_else(|| PartConfigError::MissingVisual(bp.name.clone()))?;
            visuals.push(visual);
        }

        let mut parts = Vec::with_capacity(blueprints.len());
        for ((i, bp), visual) in blueprints.iter().enumerate().zip(visuals) {
            let mut protected_by = Vec::with_capacity(bp.protected_by.len());
            for protector in &bp.protected_by {
                let Some(&id) = index.get(protector.as_str()) else {
                    return Err(PartConfigError::UnknownProtector {
                        part: bp.name.clone(),
                        protector: protector.clone(),
                    });
                };
                if id.0 == i {
                    return Err(PartConfigError::SelfProtected(bp.name.clone()));
                }
                protected_by.push(id);
            }
            parts.push(Part { name: bp.name.clone(), health: bp.health, protected_by, visual });
        }

        let set = Self { parts };
        if let Some(id) = set.find_cycle() {
            return Err(PartConfigError::ProtectionCycle(set.parts[id.0].name.clone()));
        }
        Ok(set)
    }

    /// Depth-first search over protector edges; returns a part on a cycle.
    fn find_cycle(&self) -> Option<PartId> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnStack,
            Done,
        }

        fn visit(set: &PartSet, id: usize, marks: &mut [Mark]) -> Option<PartId> {
            match marks[id] {
                Mark::Done => return None,
                Mark::OnStack => return Some(PartId(id)),
                Mark::Unvisited => {}
            }
            marks[id] = Mark::OnStack;
            for p in &set.parts[id].protected_by {
                if let Some(hit) = visit(set, p.0, marks) {
                    return Some(hit);
                }
            }
            marks[id] = Mark::Done;
            None
        }

        let mut marks = vec![Mark::Unvisited; self.parts.len()];
        (0..self.parts.len()).find_map(|i| visit(self, i, &mut marks))
    }

    /// Number of parts; never zero once resolved.
    pub fn count(&self) -> usize {
        self.parts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn get(&self, id: PartId) -> &Part {
        &self.parts[id.0]
    }

    /// Config-time lookup.
    pub fn by_name(&self, name: &str) -> Option<PartId> {
        self.parts.iter().position(|p| p.name == name).map(PartId)
    }

    /// Collision-time lookup: which part owns this collider entity.
    pub fn by_visual(&self, visual: Entity) -> Option<PartId> {
        self.parts.iter().position(|p| p.visual == visual).map(PartId)
    }

    pub fn is_destroyed(&self, id: PartId) -> bool {
        self.parts[id.0].is_destroyed()
    }

    /// True while any protector of `id` is still alive.
    pub fn is_protected(&self, id: PartId) -> bool {
        self.parts[id.0].protected_by.iter().any(|&p| !self.is_destroyed(p))
    }

    pub fn all_destroyed(&self) -> bool {
        self.parts.iter().all(Part::is_destroyed)
    }

    /// Health never goes up: negative or NaN damage counts as zero.
    pub fn apply_hit(&mut self, id: PartId, damage: f32) -> HitOutcome {
        let damage = if damage > 0.0 { damage } else { 0.0 };
        if self.is_destroyed(id) {
            return HitOutcome::AlreadyDestroyed;
        }
        if self.is_protected(id) {
            return HitOutcome::Absorbed;
        }

        let part = &mut self.parts[id.0];
        part.health -= damage;
        if part.is_destroyed() {
            HitOutcome::Destroyed
        } else {
            HitOutcome::Damaged { remaining: part.health }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in visuals: one empty entity per listed name.
    fn lookup(names: &'static [&'static str]) -> impl FnMut(&str) -> Option<Entity> {
        let mut world = World::new();
        let visuals: Vec<Entity> = names.iter().map(|_| world.spawn_empty().id()).collect();
        move |n| names.iter().position(|&x| x == n).map(|i| visuals[i])
    }

    fn pair() -> PartSet {
        let bps = [
            PartBlueprint::new("A", 10.0),
            PartBlueprint::new("B", 10.0).protected_by(["A"]),
        ];
        PartSet::resolve(&bps, lookup(&["A", "B"])).expect("valid config")
    }

    #[test]
    fn resolves_names_and_visuals() {
        let set = pair();
        let a = set.by_name("A").unwrap();
        let b = set.by_name("B").unwrap();
        assert_eq!(set.count(), 2);
        assert_eq!(set.by_visual(set.get(b).visual()), Some(b));
        assert_eq!(set.get(b).protected_by(), &[a]);
        assert_eq!(set.by_name("C"), None);
    }

    #[test]
    fn rejects_empty_config() {
        assert_eq!(PartSet::resolve(&[], |_| None).unwrap_err(), PartConfigError::NoParts);
    }

    #[test]
    fn rejects_duplicate_names() {
        let bps = [PartBlueprint::new("A", 1.0), PartBlueprint::new("A", 1.0)];
        let err = PartSet::resolve(&bps, lookup(&["A"])).unwrap_err();
        assert_eq!(err, PartConfigError::DuplicateName("A".into()));
    }

    #[test]
    fn rejects_missing_visual() {
        let bps = [PartBlueprint::new("A", 1.0), PartBlueprint::new("Ghost", 1.0)];
        let err = PartSet::resolve(&bps, lookup(&["A"])).unwrap_err();
        assert_eq!(err, PartConfigError::MissingVisual("Ghost".into()));
        assert_eq!(err.to_string(), "part 'Ghost' has no child entity with that name");
    }

    #[test]
    fn rejects_unknown_protector() {
        let bps = [PartBlueprint::new("A", 1.0).protected_by(["Nope"])];
        let err = PartSet::resolve(&bps, lookup(&["A"])).unwrap_err();
        assert_eq!(
            err,
            PartConfigError::UnknownProtector { part: "A".into(), protector: "Nope".into() }
        );
    }

    #[test]
    fn rejects_self_protection() {
        let bps = [PartBlueprint::new("A", 1.0).protected_by(["A"])];
        let err = PartSet::resolve(&bps, lookup(&["A"])).unwrap_err();
        assert_eq!(err, PartConfigError::SelfProtected("A".into()));
    }

    #[test]
    fn rejects_protection_cycles() {
        let bps = [
            PartBlueprint::new("A", 1.0).protected_by(["C"]),
            PartBlueprint::new("B", 1.0).protected_by(["A"]),
            PartBlueprint::new("C", 1.0).protected_by(["B"]),
        ];
        let err = PartSet::resolve(&bps, lookup(&["A", "B", "C"])).unwrap_err();
        assert!(matches!(err, PartConfigError::ProtectionCycle(_)));
    }

    #[test]
    fn accepts_shared_protector_diamond() {
        let bps = [
            PartBlueprint::new("Core", 5.0).protected_by(["L", "R"]),
            PartBlueprint::new("L", 5.0).protected_by(["Shell"]),
            PartBlueprint::new("R", 5.0).protected_by(["Shell"]),
            PartBlueprint::new("Shell", 5.0),
        ];
        assert!(PartSet::resolve(&bps, lookup(&["Core", "L", "R", "Shell"])).is_ok());
    }

    #[test]
    fn rejects_non_positive_health() {
        let bps = [PartBlueprint::new("A", 0.0)];
        let err = PartSet::resolve(&bps, lookup(&["A"])).unwrap_err();
        assert!(matches!(err, PartConfigError::NonPositiveHealth { .. }));
    }

    #[test]
    fn rejects_nan_health() {
        let bps = [
            PartBlueprint::new("A", f32::NAN),
            PartBlueprint::new("B", 10.0).protected_by(["A"]),
        ];
        let err = PartSet::resolve(&bps, lookup(&["A", "B"])).unwrap_err();
        assert!(matches!(err, PartConfigError::NonPositiveHealth { ref name, .. } if name == "A"));
    }

    #[test]
    fn negative_or_nan_damage_leaves_health_alone() {
        let mut set = pair();
        let a = set.by_name("A").unwrap();

        assert_eq!(set.apply_hit(a, -5.0), HitOutcome::Damaged { remaining: 10.0 });
        assert_eq!(set.apply_hit(a, f32::NAN), HitOutcome::Damaged { remaining: 10.0 });
        assert_eq!(set.apply_hit(a, 0.0), HitOutcome::Damaged { remaining: 10.0 });
        assert_eq!(set.get(a).health(), 10.0);

        assert_eq!(set.apply_hit(a, 10.0), HitOutcome::Destroyed);
    }

    #[test]
    fn protected_part_absorbs_any_number_of_hits() {
        let mut set = pair();
        let b = set.by_name("B").unwrap();
        for _ in 0..100 {
            assert_eq!(set.apply_hit(b, 5.0), HitOutcome::Absorbed);
        }
        assert_eq!(set.get(b).health(), 10.0);
    }

    #[test]
    fn protection_lifts_once_protector_is_destroyed() {
        let mut set = pair();
        let a = set.by_name("A").unwrap();
        let b = set.by_name("B").unwrap();

        assert_eq!(set.apply_hit(b, 5.0), HitOutcome::Absorbed);
        assert_eq!(set.apply_hit(a, 5.0), HitOutcome::Damaged { remaining: 5.0 });
        assert_eq!(set.apply_hit(a, 5.0), HitOutcome::Destroyed);
        assert!(!set.is_protected(b));
        assert!(!set.all_destroyed());

        assert_eq!(set.apply_hit(b, 5.0), HitOutcome::Damaged { remaining: 5.0 });
        assert_eq!(set.apply_hit(b, 5.0), HitOutcome::Destroyed);
        assert!(set.all_destroyed());
    }

    #[test]
    fn destroyed_part_transitions_once() {
        let mut set = pair();
        let a = set.by_name("A").unwrap();
        assert_eq!(set.apply_hit(a, 25.0), HitOutcome::Destroyed);
        let health = set.get(a).health();
        assert_eq!(set.apply_hit(a, 25.0), HitOutcome::AlreadyDestroyed);
        assert_eq!(set.get(a).health(), health);
    }
}
