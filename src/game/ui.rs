// HUD state fed by damage notifications

use crate::game::combat::{DamageEvent, DamageListener};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct HealthBarState {
    value: f32,
    max: f32,
    updates: u32,
}

/// Health bar shown on the HUD.
///
/// Cheap to clone: one clone is handed to the player as a damage listener,
/// the other stays with the HUD for drawing.
#[derive(Debug, Clone, Default)]
pub struct HealthBar {
    state: Rc<RefCell<HealthBarState>>,
}

impl HealthBar {
    pub fn new(max: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(HealthBarState {
                value: max,
                max,
                updates: 0,
            })),
        }
    }

    /// Displayed health
    pub fn value(&self) -> f32 {
        self.state.borrow().value
    }

    /// Fill ratio in [0, 1]
    pub fn fraction(&self) -> f32 {
        let state = self.state.borrow();
        if state.max <= 0.0 {
            return 0.0;
        }
        (state.value / state.max).clamp(0.0, 1.0)
    }

    /// Number of damage notifications received
    pub fn updates(&self) -> u32 {
        self.state.borrow().updates
    }
}

impl DamageListener for HealthBar {
    fn on_damage(&mut self, event: &DamageEvent) {
        let mut state = self.state.borrow_mut();
        state.value = event.health;
        state.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_state() {
        let hud = HealthBar::new(50.0);
        let mut listener = hud.clone();

        listener.on_damage(&DamageEvent {
            amount: 10.0,
            health: 40.0,
            fatal: false,
        });

        assert_eq!(hud.value(), 40.0);
        assert_eq!(hud.updates(), 1);
        assert!((hud.fraction() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_fraction_clamps() {
        let mut hud = HealthBar::new(10.0);
        hud.on_damage(&DamageEvent {
            amount: 15.0,
            health: -5.0,
            fatal: true,
        });
        assert_eq!(hud.fraction(), 0.0);
        assert_eq!(hud.value(), -5.0);
    }
}
