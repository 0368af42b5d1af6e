// Animator parameters written by the player controller

use std::collections::HashMap;

/// Parameters the controller drives on the host animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    /// Bool: movement vector is nonzero
    IsWalking,
    /// Trigger: dodge started
    IsDodging,
    /// Trigger: attack started
    IsAttacking,
    /// Integer: attack variant in [0, 3)
    AttackType,
    /// Trigger: hit reaction
    TakeDamage,
    /// Bool: terminal death state
    IsDead,
}

impl AnimParam {
    /// Parameter name as authored in the animation controller
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsWalking => "isWalking",
            Self::IsDodging => "isDodging",
            Self::IsAttacking => "isAttacking",
            Self::AttackType => "attackType",
            Self::TakeDamage => "takeDamage",
            Self::IsDead => "isDead",
        }
    }
}

/// Write-only view of the host animation system
pub trait Animator {
    fn set_bool(&mut self, param: AnimParam, value: bool);
    fn set_integer(&mut self, param: AnimParam, value: i32);
    fn set_trigger(&mut self, param: AnimParam);
    fn set_flip_x(&mut self, flip: bool);
}

/// Animator that stores the parameters it receives.
///
/// Stands in for the host animation controller; renderers read the
/// values back, and triggers are counted rather than consumed.
#[derive(Debug, Default)]
pub struct ParameterAnimator {
    bools: HashMap<AnimParam, bool>,
    integers: HashMap<AnimParam, i32>,
    triggers: HashMap<AnimParam, u32>,
    flip_x: bool,
}

impl ParameterAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bool parameter value (false if never set)
    pub fn bool(&self, param: AnimParam) -> bool {
        self.bools.get(&param).copied().unwrap_or(false)
    }

    /// Integer parameter value, if set
    pub fn integer(&self, param: AnimParam) -> Option<i32> {
        self.integers.get(&param).copied()
    }

    /// Number of times a trigger fired
    pub fn trigger_count(&self, param: AnimParam) -> u32 {
        self.triggers.get(&param).copied().unwrap_or(0)
    }

    /// Whether the sprite is mirrored horizontally
    pub fn is_flipped_x(&self) -> bool {
        self.flip_x
    }
}

impl Animator for ParameterAnimator {
    fn set_bool(&mut self, param: AnimParam, value: bool) {
        self.bools.insert(param, value);
    }

    fn set_integer(&mut self, param: AnimParam, value: i32) {
        self.integers.insert(param, value);
    }

    fn set_trigger(&mut self, param: AnimParam) {
        log::trace!("animator trigger {}", param.name());
        *self.triggers.entry(param).or_insert(0) += 1;
    }

    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }
}
