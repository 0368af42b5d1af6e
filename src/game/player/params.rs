// Player tuning parameters, loaded from RON

use crate::engine::physics::{CollisionLayer, LayerMask};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the player parameters file
pub const PARAMS_PATH: &str = "assets/player.ron";

/// Errors raised while loading player parameters
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid parameters file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

/// Tuning values for the player character. Read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerParameters {
    /// Movement speed (units/second)
    pub speed: f32,
    /// Starting health
    pub hp: f32,
    /// Damage dealt to every enemy caught by an attack
    pub attack_damage: f32,
    /// Radius of the attack overlap circle
    pub attack_radius: f32,
    /// Seconds between attacks
    pub attack_cooldown: f32,
    /// Seconds between dodges; also the length of the invulnerability window
    pub dodge_cooldown: f32,
    /// Layers the attack query can hit
    pub enemy_mask: Vec<CollisionLayer>,

    /// Hurtbox width in world units
    pub width: f32,
    /// Hurtbox height in world units
    pub height: f32,
}

impl Default for PlayerParameters {
    fn default() -> Self {
        Self {
            speed: 5.0,
            hp: 100.0,
            attack_damage: 10.0,
            attack_radius: 0.75,
            attack_cooldown: 0.5,
            dodge_cooldown: 0.8,
            enemy_mask: vec![CollisionLayer::Enemy],
            width: 0.8,
            height: 1.6,
        }
    }
}

impl PlayerParameters {
    /// Parse parameters from RON text and validate them
    pub fn from_ron_str(text: &str) -> Result<Self, ParamsError> {
        let params: Self = ron::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Load from `path` if it exists, otherwise use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("{} not found, using default player parameters", path.display());
            Ok(Self::default())
        }
    }

    /// Mask used by the attack overlap query
    pub fn enemy_layers(&self) -> LayerMask {
        LayerMask::from_layers(&self.enemy_mask)
    }

    /// Reject values the controller cannot run with.
    ///
    /// `attack_damage` is left alone: any amount is passed through to targets.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let non_negative = [
            ("speed", self.speed),
            ("attack_radius", self.attack_radius),
            ("attack_cooldown", self.attack_cooldown),
            ("dodge_cooldown", self.dodge_cooldown),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::InvalidValue {
                    field,
                    value,
                    reason: "must be a finite number >= 0",
                });
            }
        }

        let positive = [("hp", self.hp), ("width", self.width), ("height", self.height)];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamsError::InvalidValue {
                    field,
                    value,
                    reason: "must be a finite number > 0",
                });
            }
        }

        if self.enemy_layers().is_empty() {
            log::warn!("enemy_mask is empty, attacks will never hit anything");
        }

        Ok(())
    }
}
