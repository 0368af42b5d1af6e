// Per-player input state and phase tracking

use super::action::{Action, ActionEvent, InputPhase, InputSource, LogicalAction};
use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Held actions for the local player, turned into phased action events.
///
/// An action stays held while any of its bound sources is down.
#[derive(Debug, Default)]
pub struct PlayerInput {
    held: HashMap<Action, HashSet<InputSource>>,

    /// Last movement vector reported to listeners
    movement: Vec2,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held.get(&action).is_some_and(|sources| !sources.is_empty())
    }

    /// Current normalized movement vector
    pub fn movement(&self) -> Vec2 {
        self.movement
    }

    /// Register `source` going down for `action` and return the events it produces.
    ///
    /// Only the first held source of an action starts it.
    pub fn press(&mut self, action: Action, source: InputSource) -> Vec<ActionEvent> {
        let sources = self.held.entry(action).or_default();
        if !sources.insert(source) || sources.len() > 1 {
            return Vec::new();
        }

        match action.logical() {
            LogicalAction::Movement => self.refresh_movement(),
            logical => vec![
                ActionEvent::button(logical, InputPhase::Started, true),
                ActionEvent::button(logical, InputPhase::Performed, true),
            ],
        }
    }

    /// Register `source` going up for `action` and return the events it produces.
    ///
    /// The action is canceled when its last held source is released.
    pub fn release(&mut self, action: Action, source: InputSource) -> Vec<ActionEvent> {
        let Some(sources) = self.held.get_mut(&action) else {
            return Vec::new();
        };
        if !sources.remove(&source) || !sources.is_empty() {
            return Vec::new();
        }
        self.held.remove(&action);

        self.on_released(action)
    }

    /// Release everything that is held
    pub fn reset(&mut self) -> Vec<ActionEvent> {
        let held: Vec<Action> = self.held.drain().map(|(action, _)| action).collect();
        held.into_iter()
            .flat_map(|action| self.on_released(action))
            .collect()
    }

    fn on_released(&mut self, action: Action) -> Vec<ActionEvent> {
        match action.logical() {
            LogicalAction::Movement => self.refresh_movement(),
            logical => vec![ActionEvent::button(logical, InputPhase::Canceled, false)],
        }
    }

    /// Composite of the four direction actions, normalized
    fn composite(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            direction.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            direction.x += 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            direction.y -= 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            direction.y += 1.0;
        }

        direction.normalize_or_zero()
    }

    fn refresh_movement(&mut self) -> Vec<ActionEvent> {
        let previous = self.movement;
        let current = self.composite();
        self.movement = current;

        if current == previous {
            Vec::new()
        } else if previous == Vec2::ZERO {
            vec![
                ActionEvent::movement(InputPhase::Started, current),
                ActionEvent::movement(InputPhase::Performed, current),
            ]
        } else if current == Vec2::ZERO {
            vec![ActionEvent::movement(InputPhase::Canceled, current)]
        } else {
            vec![ActionEvent::movement(InputPhase::Performed, current)]
        }
    }
}
