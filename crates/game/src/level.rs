//! Level layout: walkable slabs and spawn points.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// How far above a slab top a body still counts as standing on it.
pub const SURFACE_TOLERANCE: f32 = 0.01;

/// A flat, axis-aligned walkable surface.
///
/// Slabs only have a top; anything below the top is considered solid for
/// landing purposes, nothing blocks sideways movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundSlab {
    /// Surface name, for logs.
    pub name: String,

    /// Minimum corner on the XZ plane.
    pub min: Vec2,

    /// Maximum corner on the XZ plane.
    pub max: Vec2,

    /// Height of the walkable top.
    pub top: f32,

    /// Friction preset selected while standing on this slab.
    pub friction_preset: i32,
}

impl GroundSlab {
    /// Check if a point is over this slab (XZ only, edges inclusive).
    pub fn contains(&self, position: Vec3) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.z >= self.min.y
            && position.z <= self.max.y
    }
}

/// A spawn point for players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Position in world space (feet).
    pub position: Vec3,

    /// Initial facing direction (yaw in radians).
    pub facing: f32,
}

/// A level containing walkable geometry and spawn points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Walkable slabs.
    pub slabs: Vec<GroundSlab>,

    /// Player spawn points.
    pub spawn_points: Vec<SpawnPoint>,

    /// Players falling below this height are respawned.
    pub kill_height: f32,
}

impl Level {
    /// Create an empty level.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slabs: Vec::new(),
            spawn_points: Vec::new(),
            kill_height: -50.0,
        }
    }

    /// Add a slab spanning `min..=max` on the XZ plane.
    pub fn add_slab(&mut self, name: &str, min: Vec2, max: Vec2, top: f32, friction_preset: i32) {
        self.slabs.push(GroundSlab {
            name: name.to_string(),
            min,
            max,
            top,
            friction_preset,
        });
    }

    /// A straight course along -Z: start pad, runway, a patch of sticky
    /// ground, then a two meter drop onto a lower field.
    pub fn test_course() -> Self {
        let mut level = Self::new("test_course", "Test Course");

        level.add_slab("start", Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0), 0.0, 0);
        level.add_slab("runway", Vec2::new(-30.0, -150.0), Vec2::new(30.0, -10.0), 0.0, 0);
        level.add_slab("mud", Vec2::new(-30.0, -180.0), Vec2::new(30.0, -150.0), 0.0, 1);
        level.add_slab("lower_field", Vec2::new(-60.0, -400.0), Vec2::new(60.0, -180.0), -2.0, 0);

        level.spawn_points.push(SpawnPoint {
            position: Vec3::ZERO,
            facing: 0.0,
        });

        level
    }

    /// Highest slab under `position` whose top is at or below `max_height`.
    pub fn ground_below(&self, position: Vec3, max_height: f32) -> Option<&GroundSlab> {
        self.slabs
            .iter()
            .filter(|slab| slab.contains(position) && slab.top <= max_height)
            .max_by(|a, b| a.top.total_cmp(&b.top))
    }

    /// The slab a body standing at `position` is on.
    pub fn surface_at(&self, position: Vec3) -> Option<&GroundSlab> {
        self.ground_below(position, position.y + SURFACE_TOLERANCE)
    }

    /// Get the number of player spawn points.
    pub fn player_spawn_count(&self) -> usize {
        self.spawn_points.len()
    }

    /// Get a player spawn point by index.
    pub fn get_player_spawn(&self, index: usize) -> Option<&SpawnPoint> {
        self.spawn_points.get(index)
    }
}
