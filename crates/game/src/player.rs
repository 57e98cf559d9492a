//! Player entity and state.

use bhop_physics::{MovementConfig, MovementState};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::mover::{CharacterMover, FlatGroundMover};

/// Unique identifier for entities.
pub type EntityId = u32;

/// A player in the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID.
    pub id: EntityId,

    /// Player name/handle.
    pub name: String,

    /// Facing direction (yaw in radians, 0 faces -Z).
    pub yaw: f32,

    /// Movement physics state.
    pub movement: MovementState,

    /// Collision body the movement is applied through.
    pub body: FlatGroundMover,

    /// Friction preset of the surface the player last stood on.
    pub surface_preset: Option<i32>,

    /// Times this player has been respawned.
    pub respawns: u32,
}

impl Player {
    /// Create a new player at the given spawn position.
    pub fn new(id: EntityId, name: String, spawn_position: Vec3, config: &MovementConfig) -> Self {
        Self {
            id,
            name,
            yaw: 0.0,
            movement: MovementState::new(config),
            body: FlatGroundMover::new(spawn_position),
            surface_preset: None,
            respawns: 0,
        }
    }

    /// Get the player's current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    /// Check if the player is on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.body.is_grounded()
    }

    /// Current horizontal speed (meters/second).
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.movement.horizontal_speed()
    }

    /// Turn by `delta` radians, keeping yaw in -PI..PI.
    pub fn turn(&mut self, delta: f32) {
        use std::f32::consts::{PI, TAU};

        self.yaw += delta;
        while self.yaw > PI {
            self.yaw -= TAU;
        }
        while self.yaw < -PI {
            self.yaw += TAU;
        }
    }

    /// Respawn the player at a new position with fresh movement state.
    pub fn respawn(&mut self, position: Vec3, facing: f32, config: &MovementConfig) {
        self.movement = MovementState::new(config);
        self.body.teleport(position);
        self.yaw = facing;
        self.surface_preset = None;
        self.respawns += 1;
    }
}
