// Player locomotion / life state machine

/// Represents the current state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Standing still
    #[default]
    Idle,
    /// Moving
    Walking,
    /// Health reached zero. Terminal.
    Dead,
}

impl PlayerState {
    /// Check if the player can move, attack or dodge
    pub fn can_act(&self) -> bool {
        !matches!(self, Self::Dead)
    }

    /// Check if the player can play a hit reaction
    pub fn can_flinch(&self) -> bool {
        !matches!(self, Self::Dead)
    }
}

/// Tracks state transitions and time spent in the current state
#[derive(Debug, Default)]
pub struct PlayerStateMachine {
    current_state: PlayerState,
    previous_state: PlayerState,
    state_time: f32,
}

impl PlayerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> PlayerState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> PlayerState {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Advance the state clock
    pub fn update(&mut self, dt: f32) {
        self.state_time += dt;
    }

    /// Follow the movement input. Ignored once dead.
    pub fn set_walking(&mut self, walking: bool) {
        let next = if walking {
            PlayerState::Walking
        } else {
            PlayerState::Idle
        };
        self.transition(next);
    }

    /// Enter the terminal state. Returns true only the first time.
    pub fn die(&mut self) -> bool {
        if self.current_state == PlayerState::Dead {
            return false;
        }
        self.previous_state = self.current_state;
        self.current_state = PlayerState::Dead;
        self.state_time = 0.0;
        true
    }

    fn transition(&mut self, new_state: PlayerState) {
        if self.current_state == PlayerState::Dead || self.current_state == new_state {
            return;
        }
        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.state_time = 0.0;
    }
}
