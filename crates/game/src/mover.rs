//! Collision-aware character movement.
//!
//! The movement solver only produces velocities. Turning a velocity into a
//! position change, and deciding whether the body ended up on the ground, is
//! the job of a [`CharacterMover`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::level::{Level, SURFACE_TOLERANCE};

/// Host-side movement primitive.
pub trait CharacterMover {
    /// Position of the body's feet.
    fn position(&self) -> Vec3;

    /// Whether the last move ended on walkable ground.
    fn is_grounded(&self) -> bool;

    /// Move by `displacement`, resolving against the level.
    fn move_by(&mut self, level: &Level, displacement: Vec3);

    /// Place the body without collision, airborne.
    fn teleport(&mut self, position: Vec3);
}

/// Mover for levels made of flat slabs.
///
/// A body lands on the highest slab top it moves down through. There are no
/// walls, so horizontal movement is never blocked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatGroundMover {
    position: Vec3,
    grounded: bool,
}

impl FlatGroundMover {
    /// Create a mover at the given position, airborne until its first move.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            grounded: false,
        }
    }
}

impl CharacterMover for FlatGroundMover {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, level: &Level, displacement: Vec3) {
        let start = self.position;
        let mut target = start + displacement;

        // Only surfaces we were above (or on) at the start of the move can catch us
        let ground = level.ground_below(target, start.y + SURFACE_TOLERANCE);

        match ground {
            Some(slab) if target.y <= slab.top => {
                target.y = slab.top;
                self.grounded = true;
            }
            _ => self.grounded = false,
        }

        self.position = target;
    }

    fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = false;
    }
}
