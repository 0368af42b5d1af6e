// Player character: parameters, action gates, state, animation and the controller

pub mod animator;
pub mod controller;
pub mod gate;
pub mod hurtbox;
pub mod params;
pub mod state;

pub use animator::{AnimParam, Animator, ParameterAnimator};
pub use controller::{PlayerBuilder, PlayerController, TickEvents, ATTACK_VARIANTS};
pub use gate::{ActionGate, GateState, GateTick};
pub use hurtbox::Hurtbox;
pub use params::{ParamsError, PlayerParameters, PARAMS_PATH};
pub use state::{PlayerState, PlayerStateMachine};
