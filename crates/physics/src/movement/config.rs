//! Movement configuration constants.
//!
//! All tunables for the ground/air solver are grouped here. The defaults are
//! the classic bunny-hop tuning: slow ground acceleration, very high air
//! acceleration, and a tiny air speed cap so strafing is what builds speed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for player movement physics.
///
/// Read-only during simulation. One config can be shared by any number of
/// [`MovementState`](super::MovementState)s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Vertical
    // ========================================================================
    /// Scale applied to the host's gravity vector while airborne.
    pub gravity_multiplier: f32,

    /// Constant downward speed applied while grounded (meters/second).
    /// Keeps the body seated on slopes and steps.
    pub stick_to_ground_force: f32,

    /// Initial upward speed of a jump (meters/second).
    pub jump_speed: f32,

    // ========================================================================
    // Horizontal
    // ========================================================================
    /// Ground acceleration factor.
    pub ground_accel: f32,

    /// Air acceleration factor.
    pub air_accel: f32,

    /// Speed a full input deflection asks for (meters/second).
    pub move_speed: f32,

    /// Cap on the wish speed used by air acceleration (meters/second).
    ///
    /// This caps how much speed can be added along the wish direction, not
    /// the total horizontal speed.
    pub max_air_speed: f32,

    // ========================================================================
    // Friction
    // ========================================================================
    /// Ground friction presets, selectable by index at runtime.
    /// Index 0 is applied when a state is (re)initialized.
    pub friction_presets: Vec<f32>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            gravity_multiplier: 1.6,
            stick_to_ground_force: 10.0,
            jump_speed: 5.0,

            ground_accel: 5.0,
            air_accel: 800.0,
            move_speed: 5.0,
            max_air_speed: 1.3,

            // Normal ground, then sticky ground
            friction_presets: vec![5.0, 10.0],
        }
    }
}

impl MovementConfig {
    /// The classic tuning (same as [`Default`]).
    pub fn classic() -> Self {
        Self::default()
    }

    /// Ice-like tuning: low friction presets, otherwise classic.
    pub fn slippery() -> Self {
        Self {
            ground_accel: 2.0,
            friction_presets: vec![0.5, 2.0],
            ..Default::default()
        }
    }

    /// Number of selectable friction presets.
    #[inline]
    pub fn preset_count(&self) -> usize {
        self.friction_presets.len()
    }

    /// Friction preset at `index`, if it exists.
    ///
    /// Negative indices are never valid.
    pub fn friction_preset(&self, index: i32) -> Option<f32> {
        let index = usize::try_from(index).ok()?;
        self.friction_presets.get(index).copied()
    }

    /// Friction applied when a state is (re)initialized.
    /// Zero if no presets are configured.
    pub fn initial_friction(&self) -> f32 {
        self.friction_presets.first().copied().unwrap_or(0.0)
    }

    /// Check the config for values the solver can't meaningfully use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("gravity_multiplier", self.gravity_multiplier),
            ("stick_to_ground_force", self.stick_to_ground_force),
            ("jump_speed", self.jump_speed),
            ("ground_accel", self.ground_accel),
            ("air_accel", self.air_accel),
            ("move_speed", self.move_speed),
            ("max_air_speed", self.max_air_speed),
        ];

        for (field, value) in scalars {
            check_scalar(field, value)?;
        }

        if self.friction_presets.is_empty() {
            return Err(ConfigError::EmptyFrictionPresets);
        }
        for &value in &self.friction_presets {
            check_scalar("friction_presets", value)?;
        }

        Ok(())
    }

    /// Parse a config from JSON and validate it.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn check_scalar(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
