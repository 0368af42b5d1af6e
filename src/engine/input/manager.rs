// Input manager - turns winit device events into action events

use super::action::{ActionEvent, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Collects device events and queues the resulting action events
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    pending: Vec<ActionEvent>,
    enabled: bool,
}

impl InputManager {
    /// Create a new input manager with the given bindings (disabled until `enable`)
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            pending: Vec::new(),
            enabled: false,
        }
    }

    /// Start accepting device events
    pub fn enable(&mut self) {
        if !self.enabled {
            self.enabled = true;
            log::debug!("Input enabled");
        }
    }

    /// Stop accepting device events; held actions are released
    pub fn disable(&mut self) {
        if self.enabled {
            self.enabled = false;
            let released = self.player.reset();
            self.pending.extend(released);
            log::debug!("Input disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_source(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state, false);
    }

    /// Route a source state change through the bindings
    pub fn process_source(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        if !self.enabled || repeat {
            return;
        }

        let Some(action) = self.config.get_action(source) else {
            return;
        };

        let events = match state {
            ElementState::Pressed => self.player.press(action, source),
            ElementState::Released => self.player.release(action, source),
        };
        self.pending.extend(events);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Get the held-input state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Get the bindings
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get mutable bindings
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::{Action, InputPhase, LogicalAction};
    use glam::Vec2;
    use winit::keyboard::KeyCode;

    fn enabled_manager() -> InputManager {
        let mut manager = InputManager::default();
        manager.enable();
        manager
    }

    #[test]
    fn test_disabled_by_default() {
        let mut manager = InputManager::default();
        assert!(!manager.is_enabled());

        manager.process_source(InputSource::key(KeyCode::KeyJ), ElementState::Pressed, false);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_key_press_produces_events() {
        let mut manager = enabled_manager();
        manager.process_source(InputSource::key(KeyCode::KeyJ), ElementState::Pressed, false);

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.action == LogicalAction::Attack));
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_mouse_attack() {
        let mut manager = enabled_manager();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(manager.player().is_pressed(Action::Attack));

        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        let events = manager.drain_events();
        assert_eq!(events.last().map(|e| e.phase), Some(InputPhase::Canceled));
    }

    #[test]
    fn test_attack_held_on_mouse_survives_key_release() {
        let mut manager = enabled_manager();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        manager.process_source(InputSource::key(KeyCode::KeyJ), ElementState::Pressed, false);
        manager.process_source(InputSource::key(KeyCode::KeyJ), ElementState::Released, false);

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.phase != InputPhase::Canceled));
        assert!(manager.player().is_pressed(Action::Attack));

        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        let events = manager.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, LogicalAction::Attack);
        assert_eq!(events[0].phase, InputPhase::Canceled);
    }

    #[test]
    fn test_both_dodge_keys_share_one_hold() {
        let mut manager = enabled_manager();
        manager.process_source(InputSource::key(KeyCode::Period), ElementState::Pressed, false);
        manager.process_source(InputSource::key(KeyCode::ShiftLeft), ElementState::Pressed, false);
        manager.process_source(InputSource::key(KeyCode::Period), ElementState::Released, false);

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert!(manager.player().is_pressed(Action::Dodge));
    }

    #[test]
    fn test_key_repeat_ignored() {
        let mut manager = enabled_manager();
        manager.process_source(InputSource::key(KeyCode::KeyD), ElementState::Pressed, true);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = enabled_manager();
        manager.process_source(InputSource::key(KeyCode::KeyQ), ElementState::Pressed, false);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_disable_releases_held_movement() {
        let mut manager = enabled_manager();
        manager.process_source(InputSource::key(KeyCode::KeyD), ElementState::Pressed, false);
        manager.drain_events();

        manager.disable();
        let events = manager.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].phase, InputPhase::Canceled);
        assert_eq!(manager.player().movement(), Vec2::ZERO);
    }

    #[test]
    fn test_rebinding_through_config() {
        let mut manager = enabled_manager();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::KeyK), Action::Dodge);

        manager.process_source(InputSource::key(KeyCode::KeyK), ElementState::Pressed, false);
        let events = manager.drain_events();
        assert!(events.iter().all(|e| e.action == LogicalAction::Dodge));
        assert!(manager.config().has_binding(Action::Dodge));
    }
}
