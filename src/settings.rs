//! Physics tuning
//!
//! Every field has a default, so a settings file only needs the values it
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GolfError, GolfResult};
use crate::level::SurfaceType;

/// Tuning values read by the tick and the shot aiming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Velocity retained after a wall bounce (0.8 = 20% loss)
    pub bounce_damping: f64,

    // === Friction per surface ===
    pub normal_friction: f64,
    pub sand_friction: f64,
    pub ice_friction: f64,

    // === Aiming ===
    /// Drag length is capped here
    pub max_aim_length: f64,
    /// Capped drag length divided by this gives shot power
    pub power_divisor: f64,
    /// Shot power to launch speed
    pub launch_scale: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounce_damping: BOUNCE_DAMPING,

            normal_friction: NORMAL_FRICTION,
            sand_friction: SAND_FRICTION,
            ice_friction: ICE_FRICTION,

            max_aim_length: MAX_AIM_LENGTH,
            power_divisor: POWER_DIVISOR,
            launch_scale: LAUNCH_SCALE,
        }
    }
}

impl Settings {
    /// Defaults with the slicker ice of the older level set
    pub fn legacy_ice() -> Self {
        Self {
            ice_friction: ICE_FRICTION_LEGACY,
            ..Self::default()
        }
    }

    /// Friction multiplier for a surface
    pub fn friction_for(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Normal => self.normal_friction,
            SurfaceType::Sand => self.sand_friction,
            SurfaceType::Ice => self.ice_friction,
        }
    }

    /// Reject values that would make the ball gain energy or divide by zero
    pub fn validate(&self) -> GolfResult<()> {
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return Err(GolfError::InvalidSettings(format!(
                "bounce_damping must be in [0, 1], got {}",
                self.bounce_damping
            )));
        }
        for (name, value) in [
            ("normal_friction", self.normal_friction),
            ("sand_friction", self.sand_friction),
            ("ice_friction", self.ice_friction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(GolfError::InvalidSettings(format!(
                    "{} must be in (0, 1), got {}",
                    name, value
                )));
            }
        }
        if !(self.max_aim_length > 0.0) {
            return Err(GolfError::InvalidSettings(format!(
                "max_aim_length must be positive, got {}",
                self.max_aim_length
            )));
        }
        if !(self.power_divisor > 0.0) {
            return Err(GolfError::InvalidSettings(format!(
                "power_divisor must be positive, got {}",
                self.power_divisor
            )));
        }
        if !(self.launch_scale >= 0.0) {
            return Err(GolfError::InvalidSettings(format!(
                "launch_scale must not be negative, got {}",
                self.launch_scale
            )));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> GolfResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> GolfResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> GolfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
