use super::collision::CollisionLayer;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new kinematic position-based body (moved by setting its next position)
    pub fn new_kinematic_position_based() -> Self {
        Self {
            body_type: RigidBodyType::KinematicPositionBased,
            position: Isometry::identity(),
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Lock rotation (sprites never rotate)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(0.0)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    layer: CollisionLayer,
    is_sensor: bool,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            layer: CollisionLayer::Default,
            is_sensor: false,
        }
    }

    /// Create a circle-shaped collider
    pub fn circle(radius: Real) -> Self {
        Self {
            shape: SharedShape::ball(radius),
            layer: CollisionLayer::Default,
            is_sensor: false,
        }
    }

    /// Create a vertical capsule-shaped collider (good for characters)
    pub fn capsule(half_height: Real, radius: Real) -> Self {
        let a = point![0.0, -half_height];
        let b = point![0.0, half_height];
        Self {
            shape: SharedShape::capsule(a, b, radius),
            layer: CollisionLayer::Default,
            is_sensor: false,
        }
    }

    /// Set the collision layer
    pub fn layer(mut self, layer: CollisionLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Make this a sensor (detects collisions but doesn't cause physical response)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        ColliderBuilder::new(self.shape)
            .collision_groups(self.layer.to_interaction_groups())
            .sensor(self.is_sensor)
            .friction(0.0)
            .restitution(0.0)
            .build()
    }
}

/// Common body configurations for game objects
pub mod presets {
    use super::*;

    /// Player body: kinematic, moved explicitly every fixed step
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_kinematic_position_based()
            .position(x, y)
            .lock_rotation()
            .build()
    }

    /// Player hurtbox (capsule shape)
    pub fn player_hurtbox(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        let half_height = ((height / 2.0) - radius).max(0.0);

        ColliderBuilder2D::capsule(half_height, radius)
            .layer(CollisionLayer::Player)
            .build()
    }

    /// Enemy body (static training target)
    pub fn enemy_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Enemy hurtbox (circle shape)
    pub fn enemy_hurtbox(radius: Real) -> Collider {
        ColliderBuilder2D::circle(radius)
            .layer(CollisionLayer::Enemy)
            .build()
    }

    /// Wall body
    pub fn wall_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Wall collider (box shape)
    pub fn wall_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .layer(CollisionLayer::Environment)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_builder_kinematic() {
        let body = BodyBuilder::new_kinematic_position_based()
            .position(10.0, 20.0)
            .build();

        assert_eq!(body.body_type(), RigidBodyType::KinematicPositionBased);
        assert_eq!(body.translation().x, 10.0);
        assert_eq!(body.translation().y, 20.0);
    }

    #[test]
    fn test_collider_builder_sensor() {
        let collider = ColliderBuilder2D::box_shape(1.0, 2.0).sensor(true).build();
        assert!(collider.is_sensor());
    }

    #[test]
    fn test_player_preset() {
        let body = presets::player_body(0.0, 0.0);
        let hurtbox = presets::player_hurtbox(1.0, 2.0);

        assert!(body.is_kinematic());
        assert!(body.is_rotation_locked());
        assert!(!hurtbox.is_sensor());
        assert_eq!(
            hurtbox.collision_groups(),
            CollisionLayer::Player.to_interaction_groups()
        );
    }

    #[test]
    fn test_enemy_preset() {
        let body = presets::enemy_body(3.0, 0.0);
        let hurtbox = presets::enemy_hurtbox(0.5);

        assert!(body.is_fixed());
        assert_eq!(
            hurtbox.collision_groups(),
            CollisionLayer::Enemy.to_interaction_groups()
        );
    }
}
