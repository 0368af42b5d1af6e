// Action gates: cooldown state machines for attack and dodge

/// Gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    /// The action may start
    Ready,
    /// The action was used and is waiting out its cooldown
    OnCooldown,
}

/// What a call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTick {
    /// Gate was already ready
    Idle,
    /// Still cooling down
    Pending,
    /// Cooldown finished during this tick
    Expired,
}

/// Multiple of `f32::EPSILON`, relative to the cooldown, below which the
/// countdown counts as finished. Covers the rounding of `f32` frame deltas.
const EXPIRY_TOLERANCE: f64 = 4.0 * f32::EPSILON as f64;

/// A ready flag plus the countdown that clears it.
///
/// The gate is only ever `OnCooldown` while `remaining > 0`, and the only way
/// back to `Ready` is the countdown reaching zero.
#[derive(Debug, Clone)]
pub struct ActionGate {
    cooldown: f32,
    /// Accumulated in f64 so rounding does not grow with the tick count
    remaining: f64,
}

impl ActionGate {
    /// Create a ready gate with the given cooldown in seconds
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown: cooldown.max(0.0),
            remaining: 0.0,
        }
    }

    /// Current state
    pub fn state(&self) -> GateState {
        if self.remaining > 0.0 {
            GateState::OnCooldown
        } else {
            GateState::Ready
        }
    }

    /// Whether the action may start now
    pub fn is_ready(&self) -> bool {
        self.state() == GateState::Ready
    }

    /// Seconds left on the cooldown
    pub fn remaining(&self) -> f32 {
        self.remaining as f32
    }

    /// Configured cooldown in seconds
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Start the action if the gate is ready and input asks for it.
    ///
    /// Returns true on the Ready -> OnCooldown transition. A zero cooldown
    /// starts the action but leaves the gate ready.
    pub fn try_trigger(&mut self, requested: bool) -> bool {
        if !requested || !self.is_ready() {
            return false;
        }
        self.remaining = f64::from(self.cooldown);
        true
    }

    /// Advance the countdown by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> GateTick {
        if self.remaining <= 0.0 {
            return GateTick::Idle;
        }

        self.remaining -= f64::from(dt);
        if self.remaining <= f64::from(self.cooldown) * EXPIRY_TOLERANCE {
            self.remaining = 0.0;
            GateTick::Expired
        } else {
            GateTick::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gate_is_ready() {
        let gate = ActionGate::new(1.0);
        assert!(gate.is_ready());
        assert_eq!(gate.remaining(), 0.0);
        assert_eq!(gate.cooldown(), 1.0);
    }

    #[test]
    fn test_trigger_requires_request() {
        let mut gate = ActionGate::new(1.0);
        assert!(!gate.try_trigger(false));
        assert!(gate.is_ready());
    }

    #[test]
    fn test_trigger_starts_cooldown() {
        let mut gate = ActionGate::new(1.0);
        assert!(gate.try_trigger(true));
        assert_eq!(gate.state(), GateState::OnCooldown);
        assert_eq!(gate.remaining(), 1.0);
    }

    #[test]
    fn test_no_retrigger_during_cooldown() {
        let mut gate = ActionGate::new(1.0);
        gate.try_trigger(true);

        // Input held for the whole window
        for _ in 0..3 {
            gate.tick(0.25);
            assert!(!gate.try_trigger(true));
        }
    }

    #[test]
    fn test_ready_after_full_duration() {
        let mut gate = ActionGate::new(1.0);
        gate.try_trigger(true);

        assert_eq!(gate.tick(0.5), GateTick::Pending);
        assert!(!gate.is_ready());
        assert_eq!(gate.tick(0.5), GateTick::Expired);
        assert!(gate.is_ready());
        assert_eq!(gate.tick(0.5), GateTick::Idle);
        assert!(gate.try_trigger(true));
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut gate = ActionGate::new(0.5);
        gate.try_trigger(true);

        let expired = (0..10)
            .map(|_| gate.tick(0.125))
            .filter(|t| *t == GateTick::Expired)
            .count();
        assert_eq!(expired, 1);
    }

    #[test]
    fn test_overshoot_clamps_to_zero() {
        let mut gate = ActionGate::new(0.25);
        gate.try_trigger(true);
        assert_eq!(gate.tick(10.0), GateTick::Expired);
        assert_eq!(gate.remaining(), 0.0);
    }

    fn ticks_until_ready(cooldown: f32, dt: f32) -> u32 {
        let mut gate = ActionGate::new(cooldown);
        gate.try_trigger(true);

        let mut ticks = 0;
        while !gate.is_ready() {
            gate.tick(dt);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_ready_on_exact_frame_at_60_fps() {
        let dt = 1.0 / 60.0;
        assert_eq!(ticks_until_ready(0.5, dt), 30);
        assert_eq!(ticks_until_ready(0.8, dt), 48);
        assert_eq!(ticks_until_ready(1.0, dt), 60);
        assert_eq!(ticks_until_ready(2.0, dt), 120);
        assert_eq!(ticks_until_ready(10.0, dt), 600);
    }

    #[test]
    fn test_ready_on_exact_frame_at_other_rates() {
        assert_eq!(ticks_until_ready(1.0, 1.0 / 144.0), 144);
        assert_eq!(ticks_until_ready(0.3, 0.1), 3);
        assert_eq!(ticks_until_ready(0.9, 0.1), 9);
    }

    #[test]
    fn test_not_ready_one_frame_early() {
        let mut gate = ActionGate::new(0.8);
        gate.try_trigger(true);

        for _ in 0..47 {
            assert_eq!(gate.tick(1.0 / 60.0), GateTick::Pending);
        }
        assert!(!gate.is_ready());
        assert_eq!(gate.tick(1.0 / 60.0), GateTick::Expired);
    }

    #[test]
    fn test_zero_cooldown_stays_ready() {
        let mut gate = ActionGate::new(0.0);
        assert!(gate.try_trigger(true));
        assert!(gate.is_ready());
        assert!(gate.try_trigger(true));
    }

    #[test]
    fn test_negative_cooldown_treated_as_zero() {
        let gate = ActionGate::new(-2.0);
        assert_eq!(gate.cooldown(), 0.0);
    }
}
