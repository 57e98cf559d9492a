//! Movement state and input structures.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::config::MovementConfig;
use super::jump::JumpState;

/// Complete per-character movement state.
///
/// Owned by the host and handed to the solver by `&mut` once per frame.
/// Nothing here refers to any engine object, so a state can be created,
/// cloned, and stepped in isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    /// Velocity in world space (meters/second). Y is vertical.
    pub velocity: Vec3,

    /// Jump latch and jump-arc flag.
    pub jump: JumpState,

    /// Grounded flag from the previous step, for landing/leaving edges.
    pub was_grounded: bool,

    /// Ground friction currently in effect. Always one of the config's
    /// presets, or zero if the config has none.
    pub friction_coefficient: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            jump: JumpState::default(),
            was_grounded: false,
            friction_coefficient: 0.0,
        }
    }
}

impl MovementState {
    /// Create a state at rest using the config's first friction preset.
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            friction_coefficient: config.initial_friction(),
            ..Default::default()
        }
    }

    /// Velocity with the vertical component removed.
    #[inline]
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }

    /// Get current horizontal speed.
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity().length()
    }

    /// Check if player is jumping.
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping()
    }
}

/// Input for a single frame, as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Raw movement axes: x = strafe (positive right), y = forward.
    /// Each axis in -1.0..=1.0.
    pub move_axis: Vec2,

    /// A jump-triggering input occurred this frame (edge, not held).
    pub jump_pressed: bool,

    /// Horizontal forward basis vector (unit length).
    pub forward: Vec3,

    /// Horizontal right basis vector (unit length, orthogonal to `forward`).
    pub right: Vec3,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            move_axis: Vec2::ZERO,
            jump_pressed: false,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl FrameInput {
    /// Create input with the given axes and the default basis
    /// (forward = -Z, right = +X).
    pub fn new(move_axis: Vec2, jump_pressed: bool) -> Self {
        Self {
            move_axis,
            jump_pressed,
            ..Default::default()
        }
    }

    /// Set the horizontal basis from a yaw angle (radians).
    ///
    /// Yaw 0 faces -Z; positive yaw turns right.
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        self.forward = Vec3::new(sin_yaw, 0.0, -cos_yaw);
        self.right = Vec3::new(cos_yaw, 0.0, sin_yaw);
        self
    }

    /// Movement axes capped to unit length. Direction is preserved.
    pub fn clamped_axis(&self) -> Vec2 {
        if self.move_axis.length() > 1.0 {
            self.move_axis.normalize_or_zero()
        } else {
            self.move_axis
        }
    }
}
