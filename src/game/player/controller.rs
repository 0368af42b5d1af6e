// Player controller: input, movement, attack/dodge gating, damage intake

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::math::{facing_for, strike_offset, FACING_RIGHT};
use crate::engine::input::{ActionEvent, InputPhase, LogicalAction};
use crate::engine::physics::{presets, LayerMask, PhysicsWorld, RigidBodyHandle};
use crate::game::combat::{
    CombatManager, DamageEvent, DamageListener, DamageReport, Damageable, Healthable,
};

use super::animator::{AnimParam, Animator, ParameterAnimator};
use super::gate::{ActionGate, GateTick};
use super::hurtbox::Hurtbox;
use super::params::{ParamsError, PlayerParameters};
use super::state::{PlayerState, PlayerStateMachine};

/// Number of attack animation variants; `attackType` is drawn from `0..ATTACK_VARIANTS`
pub const ATTACK_VARIANTS: i32 = 3;

/// What happened during one variable-rate update
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickEvents {
    /// Set when an attack started; holds the damage routed by its hit query
    pub attack: Option<Vec<DamageReport>>,
    /// A dodge started this tick
    pub dodge_started: bool,
    /// The dodge window closed this tick
    pub dodge_ended: bool,
}

/// Builds a player and its physics body
pub struct PlayerBuilder {
    params: PlayerParameters,
    spawn: Vec2,
    seed: u64,
    listeners: Vec<Box<dyn DamageListener>>,
}

impl PlayerBuilder {
    pub fn new(params: PlayerParameters) -> Self {
        Self {
            params,
            spawn: Vec2::ZERO,
            seed: 0,
            listeners: Vec::new(),
        }
    }

    /// Spawn position
    pub fn spawn_at(mut self, x: f32, y: f32) -> Self {
        self.spawn = Vec2::new(x, y);
        self
    }

    /// Seed for attack variant selection
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Register a damage listener. Listeners are fixed once the player is built.
    pub fn listener<L: DamageListener + 'static>(mut self, listener: L) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Validate parameters and create the player with the given animator
    pub fn build_with<A: Animator>(
        self,
        physics: &mut PhysicsWorld,
        animator: A,
    ) -> Result<PlayerController<A>, ParamsError> {
        self.params.validate()?;

        let body_handle = physics.add_rigid_body(presets::player_body(self.spawn.x, self.spawn.y));
        let collider = physics.add_collider(
            presets::player_hurtbox(self.params.width, self.params.height),
            body_handle,
        );

        log::info!(
            "Spawned player at ({}, {}) with {} hp",
            self.spawn.x,
            self.spawn.y,
            self.params.hp
        );

        Ok(PlayerController {
            enemy_layers: self.params.enemy_layers(),
            attack_gate: ActionGate::new(self.params.attack_cooldown),
            dodge_gate: ActionGate::new(self.params.dodge_cooldown),
            health: self.params.hp,
            params: self.params,
            body_handle,
            hurtbox: Hurtbox::new(collider),
            state_machine: PlayerStateMachine::new(),
            animator,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
            listeners: self.listeners,
            facing_direction: FACING_RIGHT,
            direction: Vec2::ZERO,
            input_enabled: false,
            attack_pressed: false,
            dodge_pressed: false,
            is_dodging: false,
            attack_count: 0,
        })
    }

    /// Create the player with a `ParameterAnimator`
    pub fn build(self, physics: &mut PhysicsWorld) -> Result<PlayerController, ParamsError> {
        self.build_with(physics, ParameterAnimator::new())
    }
}

/// The playable character
pub struct PlayerController<A: Animator = ParameterAnimator> {
    params: PlayerParameters,
    enemy_layers: LayerMask,

    // Physics
    body_handle: RigidBodyHandle,
    hurtbox: Hurtbox,

    state_machine: PlayerStateMachine,
    animator: A,
    rng: ChaCha8Rng,
    listeners: Vec<Box<dyn DamageListener>>,

    health: f32,
    /// 1 = right, -1 = left
    facing_direction: f32,
    /// Normalized movement input
    direction: Vec2,

    // Input state
    input_enabled: bool,
    attack_pressed: bool,
    dodge_pressed: bool,

    // Action gates
    attack_gate: ActionGate,
    dodge_gate: ActionGate,
    is_dodging: bool,

    /// Hit queries executed so far
    attack_count: u32,
}

impl<A: Animator> PlayerController<A> {
    /// Start listening to input (entity became active)
    pub fn on_enable(&mut self) {
        self.input_enabled = true;
    }

    /// Stop listening to input (entity became inactive); held input is dropped
    pub fn on_disable(&mut self) {
        self.input_enabled = false;
        self.direction = Vec2::ZERO;
        self.attack_pressed = false;
        self.dodge_pressed = false;
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Receive one input callback
    pub fn handle_input(&mut self, event: &ActionEvent) {
        if !self.input_enabled {
            return;
        }

        match event.action {
            LogicalAction::Movement => self.on_movement_input(event.value.as_vec2()),
            LogicalAction::Attack => self.attack_pressed = event.value.as_button(),
            // Dodge only listens to the performed phase
            LogicalAction::Dodge => {
                if event.phase == InputPhase::Performed {
                    self.dodge_pressed = event.value.as_button();
                }
            }
        }
    }

    fn on_movement_input(&mut self, direction: Vec2) {
        self.direction = direction;
        self.facing_direction = facing_for(direction, self.facing_direction);
    }

    /// Variable-rate update: advance cooldowns, then start attack and dodge
    pub fn update(
        &mut self,
        dt: f32,
        physics: &mut PhysicsWorld,
        combat: &mut CombatManager,
    ) -> TickEvents {
        let mut events = TickEvents::default();

        self.state_machine.update(dt);

        self.attack_gate.tick(dt);
        if self.dodge_gate.tick(dt) == GateTick::Expired {
            self.end_dodge(physics);
            events.dodge_ended = true;
        }

        if !self.state_machine.state().can_act() {
            self.dodge_pressed = false;
            return events;
        }

        events.attack = self.start_attack(physics, combat);
        events.dodge_started = self.dodge(physics);
        events
    }

    /// Fixed-rate update: queue the kinematic move for the next physics step
    pub fn fixed_update(&mut self, dt: f32, physics: &mut PhysicsWorld) {
        let direction = if self.state_machine.state().can_act() {
            self.direction
        } else {
            Vec2::ZERO
        };

        if let Some(position) = physics.body_position(self.body_handle) {
            physics.move_kinematic(
                self.body_handle,
                position + direction * self.params.speed * dt,
            );
        }

        let walking = direction != Vec2::ZERO;
        self.state_machine.set_walking(walking);
        self.animator.set_flip_x(self.facing_direction < 0.0);
        self.animator.set_bool(AnimParam::IsWalking, walking);
    }

    fn start_attack(
        &mut self,
        physics: &PhysicsWorld,
        combat: &mut CombatManager,
    ) -> Option<Vec<DamageReport>> {
        if !self.attack_gate.try_trigger(self.attack_pressed) {
            return None;
        }

        let variant = self.rng.gen_range(0..ATTACK_VARIANTS);
        self.animator.set_trigger(AnimParam::IsAttacking);
        self.animator.set_integer(AnimParam::AttackType, variant);

        Some(self.attack_hit(physics, combat))
    }

    /// Damage every enemy inside the attack circle
    fn attack_hit(&mut self, physics: &PhysicsWorld, combat: &mut CombatManager) -> Vec<DamageReport> {
        self.attack_count += 1;

        let Some((center, radius)) = self.attack_area(physics) else {
            return Vec::new();
        };

        physics
            .overlap_circle(center, radius, self.enemy_layers)
            .into_iter()
            .filter_map(|collider| {
                log::debug!("Attack hit {:?}", collider);
                combat.apply_damage_output(collider, self.params.attack_damage)
            })
            .collect()
    }

    fn dodge(&mut self, physics: &mut PhysicsWorld) -> bool {
        // A press that lands during the cooldown is dropped
        let requested = std::mem::take(&mut self.dodge_pressed);
        if !self.dodge_gate.try_trigger(requested) {
            return false;
        }

        self.animator.set_trigger(AnimParam::IsDodging);
        self.is_dodging = true;
        self.hurtbox.disable(physics);

        // Zero-length window
        if self.dodge_gate.is_ready() {
            self.end_dodge(physics);
        }
        true
    }

    fn end_dodge(&mut self, physics: &mut PhysicsWorld) {
        self.is_dodging = false;
        self.hurtbox.enable(physics);
    }

    fn take_damage(&mut self, amount: f32) -> DamageEvent {
        self.health -= amount;

        let fatal = self.health <= 0.0 && self.state_machine.die();
        if fatal {
            log::info!("Player died ({} hp)", self.health);
            self.animator.set_bool(AnimParam::IsDead, true);
        } else if self.state_machine.state().can_flinch() {
            self.animator.set_trigger(AnimParam::TakeDamage);
        }

        DamageEvent {
            amount,
            health: self.health,
            fatal,
        }
    }

    /// Centre and radius of the attack circle at the current position
    pub fn attack_area(&self, physics: &PhysicsWorld) -> Option<(Vec2, f32)> {
        let position = physics.body_position(self.body_handle)?;
        let center = position + strike_offset(self.direction, self.facing_direction);
        Some((center, self.params.attack_radius))
    }

    /// Current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.body_position(self.body_handle)
    }

    pub fn params(&self) -> &PlayerParameters {
        &self.params
    }

    pub fn body_handle(&self) -> RigidBodyHandle {
        self.body_handle
    }

    pub fn hurtbox(&self) -> &Hurtbox {
        &self.hurtbox
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn state(&self) -> PlayerState {
        self.state_machine.state()
    }

    pub fn is_alive(&self) -> bool {
        self.state() != PlayerState::Dead
    }

    pub fn facing_direction(&self) -> f32 {
        self.facing_direction
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Attack input currently held
    pub fn is_attacking(&self) -> bool {
        self.attack_pressed
    }

    pub fn can_attack(&self) -> bool {
        self.attack_gate.is_ready()
    }

    pub fn can_dodge(&self) -> bool {
        self.dodge_gate.is_ready()
    }

    /// Inside the dodge invulnerability window
    pub fn is_dodging(&self) -> bool {
        self.is_dodging
    }

    pub fn attack_gate(&self) -> &ActionGate {
        &self.attack_gate
    }

    pub fn dodge_gate(&self) -> &ActionGate {
        &self.dodge_gate
    }

    /// Number of hit queries executed
    pub fn attack_count(&self) -> u32 {
        self.attack_count
    }
}

impl<A: Animator> Damageable for PlayerController<A> {
    fn apply_damage(&mut self, amount: f32) {
        let event = self.take_damage(amount);
        for listener in &mut self.listeners {
            listener.on_damage(&event);
        }
    }
}

impl<A: Animator> Healthable for PlayerController<A> {
    fn health(&self) -> f32 {
        self.health
    }

    fn set_health(&mut self, value: f32) {
        self.health = value;
    }
}
