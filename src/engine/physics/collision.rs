use rapier2d::prelude::*;
use serde::{Deserialize, Serialize};

/// Collision layers used to filter queries and contacts
///
/// Each layer owns one bit. Configuration files name layers directly,
/// e.g. `enemy_mask: [Enemy]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionLayer {
    /// Default layer - interacts with everything
    Default = 0b0000_0001,

    /// The player character's hurtbox
    Player = 0b0000_0010,

    /// Hostile characters the player can hit
    Enemy = 0b0000_0100,

    /// Static walls and props
    Environment = 0b0000_1000,

    /// Trigger zones - detect but never block
    Sensor = 0b0001_0000,
}

impl CollisionLayer {
    /// Bit for this layer
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self.bits());

        let filter = match self {
            // Characters walk against walls and touch sensors, but pass through each other
            CollisionLayer::Player | CollisionLayer::Enemy => Group::from_bits_truncate(
                CollisionLayer::Environment.bits() | CollisionLayer::Sensor.bits(),
            ),

            CollisionLayer::Environment => Group::from_bits_truncate(
                CollisionLayer::Player.bits()
                    | CollisionLayer::Enemy.bits()
                    | CollisionLayer::Environment.bits(),
            ),

            CollisionLayer::Sensor | CollisionLayer::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// A set of collision layers, used as a query filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Mask matching nothing
    pub const NONE: LayerMask = LayerMask(0);

    /// Build a mask from a list of layers
    pub fn from_layers(layers: &[CollisionLayer]) -> Self {
        Self(layers.iter().fold(0, |bits, layer| bits | layer.bits()))
    }

    /// Check whether a layer is part of this mask
    pub fn contains(self, layer: CollisionLayer) -> bool {
        self.0 & layer.bits() != 0
    }

    /// Check whether any of the collider memberships fall inside this mask
    pub fn matches(self, memberships: Group) -> bool {
        memberships.intersects(Group::from_bits_truncate(self.0))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<CollisionLayer> for LayerMask {
    fn from(layer: CollisionLayer) -> Self {
        Self(layer.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_layer_bits() {
        // Ensure each layer has a unique bit
        let layers = [
            CollisionLayer::Default,
            CollisionLayer::Player,
            CollisionLayer::Enemy,
            CollisionLayer::Environment,
            CollisionLayer::Sensor,
        ];

        for (i, a) in layers.iter().enumerate() {
            for (j, b) in layers.iter().enumerate() {
                if i != j {
                    assert_eq!(a.bits() & b.bits(), 0, "Layers must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_player_passes_through_enemies() {
        let player = CollisionLayer::Player.to_interaction_groups();
        let enemy_bit = Group::from_bits_truncate(CollisionLayer::Enemy.bits());

        assert!(!player.filter.intersects(enemy_bit));
    }

    #[test]
    fn test_mask_from_layers() {
        let mask = LayerMask::from_layers(&[CollisionLayer::Enemy, CollisionLayer::Sensor]);

        assert!(mask.contains(CollisionLayer::Enemy));
        assert!(mask.contains(CollisionLayer::Sensor));
        assert!(!mask.contains(CollisionLayer::Player));
    }

    #[test]
    fn test_mask_matches_memberships() {
        let mask = LayerMask::from(CollisionLayer::Enemy);
        let enemy = CollisionLayer::Enemy.to_interaction_groups();
        let player = CollisionLayer::Player.to_interaction_groups();

        assert!(mask.matches(enemy.memberships));
        assert!(!mask.matches(player.memberships));
        assert!(LayerMask::NONE.is_empty());
    }

    #[test]
    fn test_layer_names_deserialize() {
        let layers: Vec<CollisionLayer> = ron::from_str("[Enemy, Environment]").unwrap();
        assert_eq!(layers, vec![CollisionLayer::Enemy, CollisionLayer::Environment]);
    }
}
