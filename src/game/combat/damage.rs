// Combat capabilities and damage notifications

/// Anything that can be hit
pub trait Damageable {
    /// Apply `amount` of damage. Amounts are not validated.
    fn apply_damage(&mut self, amount: f32);
}

/// Anything with a health value
pub trait Healthable {
    fn health(&self) -> f32;
    fn set_health(&mut self, value: f32);
}

/// A valid combat target: both capabilities, no hierarchy required
pub trait Combatant: Damageable + Healthable {}

impl<T: Damageable + Healthable> Combatant for T {}

/// Delivered to listeners once per `apply_damage` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    /// Damage applied
    pub amount: f32,
    /// Health after the damage
    pub health: f32,
    /// True only for the call that killed the entity
    pub fatal: bool,
}

/// Receives damage notifications for one entity
pub trait DamageListener {
    fn on_damage(&mut self, event: &DamageEvent);
}
