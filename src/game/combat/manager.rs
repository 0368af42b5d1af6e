// Routes outgoing damage from hit queries to the entity that owns the collider

use super::damage::Combatant;
use crate::engine::physics::ColliderHandle;
use std::collections::HashMap;

/// Result of routing damage to one collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageReport {
    pub collider: ColliderHandle,
    pub amount: f32,
    /// Target health after the hit
    pub health: f32,
}

/// Registry of combat targets keyed by their hurtbox collider
#[derive(Default)]
pub struct CombatManager {
    targets: HashMap<ColliderHandle, Box<dyn Combatant>>,
}

impl CombatManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target behind a collider, replacing any previous one
    pub fn register(&mut self, collider: ColliderHandle, target: Box<dyn Combatant>) {
        self.targets.insert(collider, target);
    }

    /// Remove a target
    pub fn unregister(&mut self, collider: ColliderHandle) -> Option<Box<dyn Combatant>> {
        self.targets.remove(&collider)
    }

    /// Apply damage to whatever owns `collider`.
    ///
    /// Colliders without a registered target are skipped.
    pub fn apply_damage_output(
        &mut self,
        collider: ColliderHandle,
        amount: f32,
    ) -> Option<DamageReport> {
        let Some(target) = self.targets.get_mut(&collider) else {
            log::warn!("No combat target registered for collider {:?}", collider);
            return None;
        };

        target.apply_damage(amount);
        Some(DamageReport {
            collider,
            amount,
            health: target.health(),
        })
    }

    /// Health of the target behind a collider
    pub fn health_of(&self, collider: ColliderHandle) -> Option<f32> {
        self.targets.get(&collider).map(|target| target.health())
    }

    /// Number of registered targets
    pub fn count(&self) -> usize {
        self.targets.len()
    }
}
