// Math utilities and helper functions

use glam::Vec2;

/// Facing direction to the right
pub const FACING_RIGHT: f32 = 1.0;
/// Facing direction to the left
pub const FACING_LEFT: f32 = -1.0;

/// Resolve the facing direction for a movement vector.
///
/// A zero vector keeps the previous facing. Otherwise the sign of the
/// x component decides, with zero counting as right.
pub fn facing_for(direction: Vec2, previous: f32) -> f32 {
    if direction == Vec2::ZERO {
        previous
    } else if direction.x >= 0.0 {
        FACING_RIGHT
    } else {
        FACING_LEFT
    }
}

/// Offset from the body centre used to place a melee strike.
///
/// Uses the movement direction when there is one, the facing axis otherwise.
pub fn strike_offset(direction: Vec2, facing: f32) -> Vec2 {
    if direction == Vec2::ZERO {
        Vec2::new(facing, 0.0)
    } else {
        direction
    }
}
