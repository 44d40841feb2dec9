//! Run configuration
//!
//! Loaded from JSON (any missing field falls back to its default) and
//! validated once before a [`crate::sim::SimState`] is built from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Smallest screen that still fits the logo
pub const MIN_SCREEN_W: u32 = 96;
pub const MIN_SCREEN_H: u32 = 32;

/// Largest accepted screen; keeps every pixel coordinate well inside `i32`
pub const MAX_SCREEN_W: u32 = 8192;
pub const MAX_SCREEN_H: u32 = 8192;

/// Upper bound for either particle pool
pub const MAX_POOL_CAPACITY: usize = 100_000;
/// Upper bound for the sine/cosine table
pub const MAX_ROTATION_STEPS: usize = 65_536;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("screen {width}x{height} is smaller than the minimum {}x{}", MIN_SCREEN_W, MIN_SCREEN_H)]
    ScreenTooSmall { width: u32, height: u32 },
    #[error("screen {width}x{height} is larger than the maximum {}x{}", MAX_SCREEN_W, MAX_SCREEN_H)]
    ScreenTooLarge { width: u32, height: u32 },
    #[error("{0} pool capacity must be at least 1")]
    EmptyPool(&'static str),
    #[error("{pool} pool capacity {capacity} exceeds {}", MAX_POOL_CAPACITY)]
    PoolTooLarge { pool: &'static str, capacity: usize },
    #[error("rotation table needs at least one step")]
    NoRotationSteps,
    #[error("rotation table of {0} steps exceeds {max}", max = MAX_ROTATION_STEPS)]
    TooManyRotationSteps(usize),
    #[error("rotation step must be finite, got {0}")]
    BadRotationStep(f32),
    #[error("melt rate must be at least 1 tick")]
    ZeroMeltRate,
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("gravity must be finite and non-negative, got {0}")]
    BadGravity(f32),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,

    // === Pools ===
    pub max_snow: usize,
    pub max_pile: usize,

    // === Rotation ===
    /// Entries in the sine/cosine table
    pub rotation_steps: usize,
    /// Radians per entry; `None` spreads the table over exactly one turn
    pub rotation_step: Option<f32>,

    // === Physics ===
    pub gravity: f32,
    pub friction: f32,

    // === Cadence ===
    /// Ticks between ground melt passes
    pub melt_rate: u64,
    /// Probability of a spawn attempt each tick
    pub spawn_chance: f32,
    /// Dormant period before snow starts falling
    pub start_delay_ms: u64,

    /// Seed for the headless runner's random source
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_W,
            screen_height: DEFAULT_SCREEN_H,
            max_snow: MAX_SNOW,
            max_pile: MAX_PILE,
            rotation_steps: ROT_STEPS,
            rotation_step: None,
            gravity: GRAVITY,
            friction: FRICTION,
            melt_rate: MELT_RATE,
            spawn_chance: SPAWN_CHANCE,
            start_delay_ms: START_DELAY_MS,
            seed: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width < MIN_SCREEN_W || self.screen_height < MIN_SCREEN_H {
            return Err(SettingsError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.screen_width > MAX_SCREEN_W || self.screen_height > MAX_SCREEN_H {
            return Err(SettingsError::ScreenTooLarge {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        pool_capacity("snow", self.max_snow)?;
        pool_capacity("pile", self.max_pile)?;
        if self.rotation_steps == 0 {
            return Err(SettingsError::NoRotationSteps);
        }
        if self.rotation_steps > MAX_ROTATION_STEPS {
            return Err(SettingsError::TooManyRotationSteps(self.rotation_steps));
        }
        if let Some(step) = self.rotation_step {
            if !step.is_finite() {
                return Err(SettingsError::BadRotationStep(step));
            }
        }
        if self.melt_rate == 0 {
            return Err(SettingsError::ZeroMeltRate);
        }
        unit_range("spawn_chance", self.spawn_chance)?;
        unit_range("friction", self.friction)?;
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(SettingsError::BadGravity(self.gravity));
        }
        Ok(())
    }
}

fn pool_capacity(pool: &'static str, capacity: usize) -> Result<(), SettingsError> {
    match capacity {
        0 => Err(SettingsError::EmptyPool(pool)),
        c if c > MAX_POOL_CAPACITY => Err(SettingsError::PoolTooLarge { pool, capacity }),
        _ => Ok(()),
    }
}

fn unit_range(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfUnitRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "screen_width": 400, "rotation_step": 0.05 }"#)
            .expect("valid settings");
        assert_eq!(settings.screen_width, 400);
        assert_eq!(settings.screen_height, DEFAULT_SCREEN_H);
        assert_eq!(settings.rotation_step, Some(0.05));
        assert_eq!(settings.max_pile, MAX_PILE);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = Settings::from_json(r#"{ "max_snow": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyPool("snow")));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let settings = Settings {
            spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::OutOfUnitRange { name: "spawn_chance", .. })
        ));
    }

    #[test]
    fn test_rejects_tiny_screen() {
        let settings = Settings {
            screen_width: 40,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ScreenTooSmall { width: 40, .. })
        ));
    }

    #[test]
    fn test_rejects_huge_screen() {
        let settings = Settings {
            screen_width: 3_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ScreenTooLarge { width: 3_000_000_000, .. })
        ));

        let settings = Settings {
            screen_height: MAX_SCREEN_H + 1,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            screen_width: MAX_SCREEN_W,
            screen_height: MAX_SCREEN_H,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_tables() {
        let err = Settings::from_json(r#"{ "max_pile": 1000000000 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::PoolTooLarge { pool: "pile", capacity: 1_000_000_000 }
        ));

        let settings = Settings {
            max_snow: MAX_POOL_CAPACITY + 1,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PoolTooLarge { pool: "snow", .. })
        ));

        let settings = Settings {
            rotation_steps: MAX_ROTATION_STEPS + 1,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::TooManyRotationSteps(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: 42,
            ..Default::default()
        };
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid"), settings);
    }
}
