// Input handling system
//
// Maps keyboard and mouse input onto the three logical signals the player
// controller consumes (movement vector, attack, dodge), each delivered as
// started / performed / canceled events.
//
// - `action`: physical and logical actions, phases, default bindings
// - `config`: bindings and remapping
// - `player`: held-input state and phase tracking
// - `manager`: winit event intake and the event queue
//
// ```rust
// let mut input = InputManager::default();
// input.enable();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per frame
// for event in input.drain_events() {
//     player.handle_input(&event);
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, ActionEvent, InputPhase, InputSource, InputValue, LogicalAction};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
