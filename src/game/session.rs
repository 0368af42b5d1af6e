// One play session: physics world, combat targets, the player and its HUD

use glam::Vec2;

use crate::engine::game_loop::{FrameStep, FIXED_TIMESTEP};
use crate::engine::input::ActionEvent;
use crate::engine::physics::{presets, ColliderHandle, CollisionLayer, PhysicsWorld};
use crate::game::combat::{CombatManager, Damageable, TrainingDummy};
use crate::game::player::{ParamsError, PlayerBuilder, PlayerController, PlayerParameters, TickEvents};
use crate::game::ui::HealthBar;

/// Radius of a training dummy's hurtbox
const DUMMY_RADIUS: f32 = 0.4;

pub struct GameSession {
    physics: PhysicsWorld,
    combat: CombatManager,
    player: PlayerController,
    health_bar: HealthBar,
}

impl GameSession {
    /// Create a session with the player at the origin and input enabled
    pub fn new(params: PlayerParameters, seed: u64) -> Result<Self, ParamsError> {
        let mut physics = PhysicsWorld::new(FIXED_TIMESTEP);
        let health_bar = HealthBar::new(params.hp);

        let mut player = PlayerBuilder::new(params)
            .seed(seed)
            .listener(health_bar.clone())
            .build(&mut physics)?;
        player.on_enable();

        Ok(Self {
            physics,
            combat: CombatManager::new(),
            player,
            health_bar,
        })
    }

    /// Place a training dummy the player can hit
    pub fn spawn_dummy(&mut self, name: &str, x: f32, y: f32, health: f32) -> ColliderHandle {
        let body = self.physics.add_rigid_body(presets::enemy_body(x, y));
        let collider = self
            .physics
            .add_collider(presets::enemy_hurtbox(DUMMY_RADIUS), body);
        self.combat
            .register(collider, Box::new(TrainingDummy::new(name, health)));

        log::info!("Spawned dummy '{}' at ({}, {})", name, x, y);
        collider
    }

    /// Place static scenery
    pub fn spawn_wall(&mut self, x: f32, y: f32, width: f32, height: f32) -> ColliderHandle {
        let body = self.physics.add_rigid_body(presets::wall_body(x, y));
        self.physics
            .add_collider(presets::wall_collider(width, height), body)
    }

    /// Forward one input callback to the player
    pub fn handle_input(&mut self, event: &ActionEvent) {
        self.player.handle_input(event);
    }

    /// Variable-rate update
    pub fn update(&mut self, dt: f32) -> TickEvents {
        self.player.update(dt, &mut self.physics, &mut self.combat)
    }

    /// Fixed-rate update: move the player, then step physics
    pub fn fixed_update(&mut self) {
        let dt = self.physics.timestep();
        self.player.fixed_update(dt, &mut self.physics);
        self.physics.step();
    }

    /// Run one frame: the variable step, then the fixed steps
    pub fn frame(&mut self, step: FrameStep) -> TickEvents {
        let events = self.update(step.delta);
        for _ in 0..step.fixed_steps {
            self.fixed_update();
        }
        events
    }

    /// Hit the player with an area attack. Misses while the hurtbox is disabled.
    pub fn strike_player(&mut self, center: Vec2, radius: f32, amount: f32) -> bool {
        let hurtbox = self.player.hurtbox().collider();
        let hit = self
            .physics
            .overlap_circle(center, radius, CollisionLayer::Player.into())
            .contains(&hurtbox);

        if hit {
            self.player.apply_damage(amount);
        }
        hit
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.player.position(&self.physics)
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn combat(&self) -> &CombatManager {
        &self.combat
    }

    pub fn health_bar(&self) -> &HealthBar {
        &self.health_bar
    }
}
