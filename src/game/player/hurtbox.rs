// Hurtbox toggling for the dodge invulnerability window

use crate::engine::physics::{ColliderHandle, PhysicsWorld};

/// The player's damage-receiving collider and its enabled state.
///
/// Disabling or enabling twice in a row is a no-op, so the physics collider
/// only ever sees one change per transition.
#[derive(Debug)]
pub struct Hurtbox {
    collider: ColliderHandle,
    enabled: bool,
    enable_count: u32,
    disable_count: u32,
}

impl Hurtbox {
    pub fn new(collider: ColliderHandle) -> Self {
        Self {
            collider,
            enabled: true,
            enable_count: 0,
            disable_count: 0,
        }
    }

    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of disabled -> enabled transitions so far
    pub fn enable_count(&self) -> u32 {
        self.enable_count
    }

    /// Number of enabled -> disabled transitions so far
    pub fn disable_count(&self) -> u32 {
        self.disable_count
    }

    pub fn disable(&mut self, physics: &mut PhysicsWorld) {
        if self.enabled {
            self.enabled = false;
            self.disable_count += 1;
            physics.set_collider_enabled(self.collider, false);
        }
    }

    pub fn enable(&mut self, physics: &mut PhysicsWorld) {
        if !self.enabled {
            self.enabled = true;
            self.enable_count += 1;
            physics.set_collider_enabled(self.collider, true);
        }
    }
}
