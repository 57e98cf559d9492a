//! Bunny-hop host adapter
//!
//! This crate plays the host around the movement solver:
//!
//! - Player input handling (keys and scroll wheel to [`bhop_physics::FrameInput`])
//! - A collision-aware mover that applies solver velocities
//! - Levels made of flat slabs with per-surface friction presets
//! - A fixed-timestep simulation driving any number of players
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        Simulation tick                        │
//! │  ┌─────────┐   ┌────────────────┐   ┌──────────────────────┐  │
//! │  │ Player  │──►│ MovementSolver │──►│ CharacterMover       │  │
//! │  │ Input   │   │ (velocity)     │   │ (position, grounded) │  │
//! │  └─────────┘   └────────────────┘   └──────────────────────┘  │
//! │        ▲                                       │              │
//! │        └──────── grounded, surface friction ◄──┘              │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod input;
pub mod level;
pub mod mover;
pub mod player;
pub mod simulation;

// Re-export main types
pub use input::PlayerInput;
pub use level::Level;
pub use mover::{CharacterMover, FlatGroundMover};
pub use player::Player;
pub use simulation::{drive_character, Simulation, SimulationConfig};

// Re-export physics types for convenience
pub use bhop_physics::{FrameInput, MovementConfig, MovementSolver, MovementState};
