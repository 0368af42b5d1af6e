// Game action definitions and mappings

use glam::Vec2;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Physical-level actions a key or button can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement composite parts
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Combat
    Attack,
    Dodge,
}

impl Action {
    /// Logical action this binding feeds
    pub fn logical(self) -> LogicalAction {
        match self {
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
                LogicalAction::Movement
            }
            Action::Attack => LogicalAction::Attack,
            Action::Dodge => LogicalAction::Dodge,
        }
    }
}

/// The three signals the player controller consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAction {
    /// Continuous 2D vector
    Movement,
    /// Button
    Attack,
    /// Button
    Dodge,
}

/// Callback phase of a logical action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPhase {
    /// Control left its default state
    Started,
    /// Value changed (or button press completed)
    Performed,
    /// Control went back to its default state
    Canceled,
}

/// Value carried by an action event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue {
    Axis2(Vec2),
    Button(bool),
}

impl InputValue {
    /// Read as a 2D vector; buttons read as zero
    pub fn as_vec2(self) -> Vec2 {
        match self {
            InputValue::Axis2(v) => v,
            InputValue::Button(_) => Vec2::ZERO,
        }
    }

    /// Read as a button; vectors are pressed when nonzero
    pub fn as_button(self) -> bool {
        match self {
            InputValue::Axis2(v) => v != Vec2::ZERO,
            InputValue::Button(pressed) => pressed,
        }
    }
}

/// One start/perform/cancel callback delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub action: LogicalAction,
    pub phase: InputPhase,
    pub value: InputValue,
}

impl ActionEvent {
    pub fn movement(phase: InputPhase, direction: Vec2) -> Self {
        Self {
            action: LogicalAction::Movement,
            phase,
            value: InputValue::Axis2(direction),
        }
    }

    pub fn button(action: LogicalAction, phase: InputPhase, pressed: bool) -> Self {
        Self {
            action,
            phase,
            value: InputValue::Button(pressed),
        }
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD)
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        // Attack
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        (InputSource::key(KeyCode::KeyJ), Action::Attack),
        // Dodge
        (InputSource::key(KeyCode::ShiftLeft), Action::Dodge),
        (InputSource::key(KeyCode::Period), Action::Dodge),
    ]
}
