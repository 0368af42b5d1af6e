// Input configuration and remapping

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action, replacing any previous binding of that source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
        for (source, action) in default_bindings() {
            self.bind(source, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyK);
        config.bind(source, Action::Attack);

        assert_eq!(config.get_action(source), Some(Action::Attack));
    }

    #[test]
    fn test_unbind_source() {
        let mut config = InputConfig::default();
        let source = InputSource::key(KeyCode::KeyJ);
        config.unbind_source(source);

        assert_eq!(config.get_action(source), None);
        // Left mouse still attacks
        assert!(config.has_binding(Action::Attack));
    }

    #[test]
    fn test_get_sources() {
        let config = InputConfig::default();
        let sources = config.get_sources(Action::Dodge);

        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&InputSource::key(KeyCode::ShiftLeft)));
        assert!(sources.contains(&InputSource::key(KeyCode::Period)));
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::mouse(MouseButton::Right);

        config.bind(source, Action::Attack);
        config.bind(source, Action::Dodge);

        assert_eq!(config.get_action(source), Some(Action::Dodge));
        assert!(!config.has_binding(Action::Attack));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(InputSource::key(KeyCode::KeyZ), Action::MoveLeft);
        config.reset_to_defaults();

        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyZ)), None);
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyA)),
            Some(Action::MoveLeft)
        );
    }
}
