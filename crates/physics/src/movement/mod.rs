//! Player movement physics system.
//!
//! This module implements Quake-style bunny-hop movement with:
//!
//! - Ground and air movement with different physics
//! - Speed-proportional friction with runtime-selectable presets
//! - Capped air acceleration (strafe-jumping builds speed)
//! - One-frame jump buffering with landing/ledge edge detection
//!
//! # Design
//!
//! Movement is driven by the [`MovementSolver`], which takes a [`FrameInput`]
//! and the host's grounded flag and updates a [`MovementState`]. The solver
//! never moves anything itself: it returns a velocity for the host's own
//! collision-aware mover to apply.
//!
//! All movement is deterministic - the same inputs will always produce the same
//! outputs.

mod accelerate;
mod config;
mod jump;
mod solver;
mod state;

pub use accelerate::{
    accelerate, air_accelerate, apply_friction, wish_direction, wish_velocity, FrictionResult,
};
pub use config::MovementConfig;
pub use jump::JumpState;
pub use solver::{MovementSolver, DEFAULT_GRAVITY};
pub use state::{FrameInput, MovementState};
