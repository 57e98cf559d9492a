//! Player input handling.
//!
//! This module converts raw input (keys, mouse, scroll wheel) into a
//! [`FrameInput`] for the movement solver.

use bhop_physics::FrameInput;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Raw player input for a single frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys held.
    pub movement: MovementKeys,

    /// Yaw change this frame (radians, positive turns right).
    pub yaw_delta: f32,

    /// Action inputs.
    pub actions: ActionInput,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Action inputs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActionInput {
    /// Jump key went down this frame (not held).
    pub jump: bool,

    /// Scroll wheel movement this frame. Any scroll counts as a jump,
    /// the usual bunny-hop binding.
    pub scroll_delta: f32,
}

impl PlayerInput {
    /// Raw movement axes: x = strafe, y = forward. Each axis is -1, 0 or 1.
    ///
    /// Diagonals are left unnormalized; the solver caps the magnitude.
    pub fn move_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;

        if self.movement.forward {
            axis.y += 1.0;
        }
        if self.movement.backward {
            axis.y -= 1.0;
        }
        if self.movement.right {
            axis.x += 1.0;
        }
        if self.movement.left {
            axis.x -= 1.0;
        }

        axis
    }

    /// Check if a jump was triggered this frame.
    #[inline]
    pub fn wants_jump(&self) -> bool {
        self.actions.jump || self.actions.scroll_delta != 0.0
    }

    /// Convert to solver input, with the basis taken from the player's yaw.
    pub fn to_frame_input(&self, yaw: f32) -> FrameInput {
        FrameInput::new(self.move_axis(), self.wants_jump()).with_yaw(yaw)
    }
}
