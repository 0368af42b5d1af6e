// Training dummy: the simplest enemy that can be hit

use super::damage::{Damageable, Healthable};

#[derive(Debug, Clone)]
pub struct TrainingDummy {
    name: String,
    health: f32,
    hits_taken: u32,
}

impl TrainingDummy {
    pub fn new(name: &str, health: f32) -> Self {
        Self {
            name: name.to_string(),
            health,
            hits_taken: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }
}

impl Damageable for TrainingDummy {
    fn apply_damage(&mut self, amount: f32) {
        self.health -= amount;
        self.hits_taken += 1;
        log::debug!("{} took {} damage ({} left)", self.name, amount, self.health);
    }
}

impl Healthable for TrainingDummy {
    fn health(&self) -> f32 {
        self.health
    }

    fn set_health(&mut self, value: f32) {
        self.health = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_takes_damage() {
        let mut dummy = TrainingDummy::new("dummy", 30.0);
        dummy.apply_damage(12.0);
        dummy.apply_damage(12.0);

        assert_eq!(dummy.health(), 6.0);
        assert_eq!(dummy.hits_taken(), 2);
        assert_eq!(dummy.name(), "dummy");
    }

    #[test]
    fn test_negative_damage_heals() {
        let mut dummy = TrainingDummy::new("dummy", 10.0);
        dummy.apply_damage(-5.0);
        assert_eq!(dummy.health(), 15.0);
    }

    #[test]
    fn test_set_health() {
        let mut dummy = TrainingDummy::new("dummy", 10.0);
        dummy.set_health(1.0);
        assert_eq!(dummy.health(), 1.0);
    }
}
