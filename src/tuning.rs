//! Data-driven movement tuning
//!
//! Defaults reproduce the classic feel. A JSON document may override any
//! subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Per-tick movement constants (units per tick, not per second)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Horizontal acceleration while a direction is held
    pub move_accel: f32,
    /// Multiplier applied to x velocity when no single direction is held
    pub friction: f32,
    /// Absolute cap on x velocity
    pub max_speed_x: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_velocity: f32,
    /// Added to y velocity every tick
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// How far below the world bottom the player may drop before losing a life
    pub fall_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_accel: 0.8,
            friction: 0.8,
            max_speed_x: 5.0,
            jump_velocity: -14.0,
            gravity: 0.9,
            max_fall_speed: 18.0,
            fall_margin: 120.0,
        }
    }
}

impl Tuning {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that break the simulation's assumptions
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.move_accel.is_finite() && self.move_accel > 0.0) {
            return invalid("move_accel", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return invalid("friction", "must be within 0..=1");
        }
        if !(self.max_speed_x.is_finite() && self.max_speed_x > 0.0) {
            return invalid("max_speed_x", "must be positive");
        }
        if !(self.jump_velocity.is_finite() && self.jump_velocity < 0.0) {
            return invalid("jump_velocity", "must be negative (upward)");
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.max_fall_speed.is_finite() && self.max_fall_speed > 0.0) {
            return invalid("max_fall_speed", "must be positive");
        }
        if !(self.fall_margin.is_finite() && self.fall_margin >= 0.0) {
            return invalid("fall_margin", "must not be negative");
        }
        Ok(())
    }
}
