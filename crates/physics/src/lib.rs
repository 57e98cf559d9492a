//! Bunny-hop movement physics
//!
//! A deterministic first-person movement solver in the Quake/Source tradition:
//! slow, friction-bound ground movement and fast, speed-capped air movement,
//! so that chaining jumps while strafing builds speed.
//!
//! # Architecture
//!
//! - **Movement**: the per-frame velocity update ([`MovementSolver::step`])
//! - **Error**: failures when loading a [`MovementConfig`] from disk
//!
//! Collision, ground detection and input polling belong to the host. Each
//! frame the host passes a grounded flag and a [`FrameInput`], and applies the
//! returned velocity through its own mover.
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same inputs always produce same outputs
//! 2. **No hidden globals**: frame time and gravity are explicit parameters
//! 3. **Explicit state**: everything that persists between frames lives in [`MovementState`]

pub mod error;
pub mod movement;

// Re-export commonly used types
pub use error::ConfigError;
pub use movement::{
    FrameInput, JumpState, MovementConfig, MovementSolver, MovementState, DEFAULT_GRAVITY,
};
