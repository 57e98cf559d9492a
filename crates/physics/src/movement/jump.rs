//! Jump latch and jump-arc tracking.
//!
//! A jump request is buffered for exactly one frame. If the body is grounded
//! during that frame the jump fires; otherwise the request is dropped and has
//! to be issued again. Holding the jump input edge on every frame while
//! airborne is what produces a jump on the first frame of ground contact.

use serde::{Deserialize, Serialize};

/// Jump state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpState {
    /// A jump has been requested this frame and not yet used.
    queued: bool,

    /// Player jumped and has not been grounded since.
    is_jumping: bool,
}

impl JumpState {
    /// Create a new jump state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a jump request is latched.
    #[inline]
    pub fn is_queued(&self) -> bool {
        self.queued
    }

    /// Whether the player is in a jump arc.
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    /// Latch a jump request. An already latched request is kept.
    pub fn latch(&mut self, jump_pressed: bool) {
        if !self.queued {
            self.queued = jump_pressed;
        }
    }

    /// Use the latched request, if any, to start a jump.
    ///
    /// Returns true if a jump was triggered.
    pub fn trigger(&mut self) -> bool {
        if !self.queued {
            return false;
        }
        self.queued = false;
        self.is_jumping = true;
        true
    }

    /// Ground contact ends the jump arc.
    pub fn land(&mut self) {
        self.is_jumping = false;
    }

    /// Drop any unused request at the end of a frame.
    pub fn clear_queue(&mut self) {
        self.queued = false;
    }
}
