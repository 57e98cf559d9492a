//! Errors raised while loading movement configuration.
//!
//! The solver itself never fails; these only cover configs coming from disk.

use thiserror::Error;

/// Errors that can occur when loading or validating a [`MovementConfig`](crate::MovementConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("at least one friction preset is required")]
    EmptyFrictionPresets,

    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
}
