// Combat: damage capabilities, routing and simple targets

pub mod damage;
pub mod dummy;
pub mod manager;

pub use damage::{Combatant, DamageEvent, DamageListener, Damageable, Healthable};
pub use dummy::TrainingDummy;
pub use manager::{CombatManager, DamageReport};
