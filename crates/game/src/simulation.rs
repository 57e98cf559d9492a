//! Game simulation - the main game loop.
//!
//! Runs the movement solver for every player at a fixed timestep. The
//! simulation plays the host role: it reads grounded state from each
//! player's mover, picks friction from the surface underfoot, and applies
//! the solver's velocity through the mover.

use bhop_physics::{FrameInput, MovementConfig, MovementSolver, MovementState, DEFAULT_GRAVITY};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;
use crate::level::Level;
use crate::mover::CharacterMover;
use crate::player::{EntityId, Player};

/// Game simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Movement physics configuration.
    pub movement: MovementConfig,

    /// World gravity (meters/second²).
    pub gravity: Vec3,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 50,
            movement: MovementConfig::default(),
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl SimulationConfig {
    /// Get the time step per tick in seconds.
    ///
    /// A tick rate of zero is treated as one tick per second.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

/// Run one solver step for a character and apply the result through its mover.
///
/// Returns the velocity that was applied.
pub fn drive_character<M: CharacterMover>(
    solver: &MovementSolver,
    state: &mut MovementState,
    mover: &mut M,
    level: &Level,
    input: &FrameInput,
    delta_time: f32,
) -> Vec3 {
    let grounded = mover.is_grounded();
    let velocity = solver.step(state, input, grounded, delta_time);
    mover.move_by(level, velocity * delta_time);
    velocity
}

/// The main game simulation.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// All players in the game.
    pub players: Vec<Player>,

    /// Movement solver shared by all players.
    solver: MovementSolver,

    /// Next entity ID to assign.
    next_entity_id: EntityId,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        let solver = MovementSolver::with_gravity(config.movement.clone(), config.gravity);

        Self {
            frame: 0,
            config,
            level,
            players: Vec::new(),
            solver,
            next_entity_id: 1,
        }
    }

    /// Create a simulation with default configuration and the test course.
    pub fn test() -> Self {
        Self::new(SimulationConfig::default(), Level::test_course())
    }

    /// The solver driving all players.
    pub fn solver(&self) -> &MovementSolver {
        &self.solver
    }

    /// Add a player to the simulation.
    ///
    /// Returns the player's ID.
    pub fn add_player(&mut self, name: &str) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;

        let spawn_index = self.players.len() % self.level.player_spawn_count().max(1);
        let spawn = self.level.get_player_spawn(spawn_index);

        let position = spawn.map(|s| s.position).unwrap_or(Vec3::ZERO);
        let facing = spawn.map(|s| s.facing).unwrap_or(0.0);

        let mut player = Player::new(id, name.to_string(), position, &self.solver.config);
        player.yaw = facing;

        self.players.push(player);
        id
    }

    /// Remove a player from the simulation.
    pub fn remove_player(&mut self, player_id: EntityId) {
        self.players.retain(|p| p.id != player_id);
    }

    /// Get a player by ID.
    pub fn get_player(&self, player_id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Get a mutable reference to a player by ID.
    pub fn get_player_mut(&mut self, player_id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Respawn a player at their spawn point with fresh movement state.
    ///
    /// Returns false if there is no such player.
    pub fn respawn(&mut self, player_id: EntityId) -> bool {
        let Some(index) = self.players.iter().position(|p| p.id == player_id) else {
            return false;
        };
        respawn_player(&self.level, &self.solver, index, &mut self.players[index]);
        true
    }

    /// Advance the simulation by one tick.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Player inputs indexed by player position in the `players` array
    pub fn tick(&mut self, inputs: &[PlayerInput]) {
        let delta_time = self.config.delta_time();

        for (i, player) in self.players.iter_mut().enumerate() {
            // Get input for this player (default if not provided)
            let input = inputs.get(i).cloned().unwrap_or_default();

            player.turn(input.yaw_delta);

            if player.on_ground() {
                update_surface(&self.level, &self.solver, player);
            }

            let frame_input = input.to_frame_input(player.yaw);
            drive_character(
                &self.solver,
                &mut player.movement,
                &mut player.body,
                &self.level,
                &frame_input,
                delta_time,
            );

            if player.position().y < self.level.kill_height {
                log::debug!("player {} fell out of the level", player.id);
                respawn_player(&self.level, &self.solver, i, player);
            }
        }

        self.frame += 1;
    }

    /// Get the delta time for this simulation.
    pub fn delta_time(&self) -> f32 {
        self.config.delta_time()
    }
}

/// Select the friction preset of the surface underfoot when it changes.
fn update_surface(level: &Level, solver: &MovementSolver, player: &mut Player) {
    let Some(slab) = level.surface_at(player.position()) else {
        return;
    };
    if player.surface_preset == Some(slab.friction_preset) {
        return;
    }

    if solver.set_friction(&mut player.movement, slab.friction_preset) {
        log::debug!(
            "player {} entered {}: friction {}",
            player.id,
            slab.name,
            player.movement.friction_coefficient
        );
    }
    player.surface_preset = Some(slab.friction_preset);
}

fn respawn_player(level: &Level, solver: &MovementSolver, index: usize, player: &mut Player) {
    let spawn_index = index % level.player_spawn_count().max(1);
    let spawn = level.get_player_spawn(spawn_index);

    let position = spawn.map(|s| s.position).unwrap_or(Vec3::ZERO);
    let facing = spawn.map(|s| s.facing).unwrap_or(0.0);

    player.respawn(position, facing, &solver.config);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mover::FlatGroundMover;

    fn forward() -> PlayerInput {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input
    }

    /// Strafe right while turning right, jumping every frame via the scroll wheel.
    fn strafe_hop() -> PlayerInput {
        let mut input = PlayerInput::default();
        input.movement.right = true;
        input.yaw_delta = 0.05;
        input.actions.scroll_delta = 1.0;
        input
    }

    #[test]
    fn test_simulation_creation() {
        let sim = Simulation::test();
        assert_eq!(sim.frame, 0);
        assert!(sim.players.is_empty());
        assert!((sim.delta_time() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_zero_tick_rate_has_finite_delta_time() {
        let config = SimulationConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.delta_time(), 1.0);

        let mut sim = Simulation::new(config, Level::test_course());
        let id = sim.add_player("Player1");
        sim.tick(&[forward()]);

        let player = sim.get_player(id).expect("player exists");
        assert!(player.position().is_finite());
        assert!(player.movement.velocity.is_finite());
    }

    #[test]
    fn test_add_and_remove_player() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");
        let other = sim.add_player("Player2");
        assert_ne!(id, other);

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.position(), Vec3::ZERO);
        assert_eq!(player.movement.friction_coefficient, 5.0);

        sim.remove_player(id);
        assert!(sim.get_player(id).is_none());
        assert!(sim.get_player(other).is_some());
    }

    #[test]
    fn test_settles_on_ground() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");

        sim.tick(&[]);
        sim.tick(&[]);

        let player = sim.get_player(id).expect("player exists");
        assert!(player.on_ground());
        assert_eq!(player.position().y, 0.0);
        assert_eq!(player.movement.velocity.y, -10.0);
    }

    #[test]
    fn test_forward_movement() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");

        for _ in 0..50 {
            sim.tick(&[forward()]);
        }

        let player = sim.get_player(id).expect("player exists");
        assert!(player.on_ground());
        assert!(player.position().z < -1.0, "Should have moved along -Z, z={}", player.position().z);
        assert!(player.horizontal_speed() > 4.0);
        assert!(player.horizontal_speed() <= sim.solver().config.move_speed);
    }

    #[test]
    fn test_jump_leaves_and_returns_to_ground() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");
        sim.tick(&[]);

        let mut jump = PlayerInput::default();
        jump.actions.jump = true;
        sim.tick(&[jump]);

        let player = sim.get_player(id).expect("player exists");
        assert!(!player.on_ground());
        assert!(player.movement.is_jumping());

        for _ in 0..100 {
            sim.tick(&[]);
        }
        let player = sim.get_player(id).expect("player exists");
        assert!(player.on_ground());
        assert!(!player.movement.is_jumping());
    }

    #[test]
    fn test_surface_selects_friction() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");

        if let Some(player) = sim.get_player_mut(id) {
            player.body.teleport(Vec3::new(0.0, 0.0, -160.0));
        }
        sim.tick(&[]);
        sim.tick(&[]);

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.movement.friction_coefficient, 10.0, "Mud is the sticky preset");
        assert_eq!(player.surface_preset, Some(1));

        if let Some(player) = sim.get_player_mut(id) {
            player.body.teleport(Vec3::new(0.0, 0.0, -50.0));
        }
        sim.tick(&[]);
        sim.tick(&[]);

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.movement.friction_coefficient, 5.0);
    }

    #[test]
    fn test_out_of_range_surface_preset_is_ignored() {
        let mut level = Level::test_course();
        level.slabs[0].friction_preset = 7;

        let mut sim = Simulation::new(SimulationConfig::default(), level);
        let id = sim.add_player("Player1");
        for _ in 0..3 {
            sim.tick(&[]);
        }

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.movement.friction_coefficient, 5.0);
    }

    #[test]
    fn test_falling_out_respawns() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");

        if let Some(player) = sim.get_player_mut(id) {
            player.body.teleport(Vec3::new(500.0, 0.0, 0.0));
        }
        for _ in 0..300 {
            sim.tick(&[]);
        }

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.respawns, 1);
        assert!(player.on_ground());
        assert_eq!(player.position(), Vec3::ZERO);
    }

    #[test]
    fn test_manual_respawn() {
        let mut sim = Simulation::test();
        let id = sim.add_player("Player1");
        for _ in 0..20 {
            sim.tick(&[forward()]);
        }

        assert!(sim.respawn(id));
        assert!(!sim.respawn(999));

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.position(), Vec3::ZERO);
        assert_eq!(player.horizontal_speed(), 0.0);
    }

    #[test]
    fn test_strafe_hopping_beats_ground_speed() {
        let mut arena = Level::new("arena", "Arena");
        arena.add_slab("floor", glam::Vec2::splat(-500.0), glam::Vec2::splat(500.0), 0.0, 0);

        let mut sim = Simulation::new(SimulationConfig::default(), arena);
        let id = sim.add_player("Player1");

        for _ in 0..50 {
            sim.tick(&[forward()]);
        }

        let mut top_speed: f32 = 0.0;
        for _ in 0..300 {
            sim.tick(&[strafe_hop()]);
            if let Some(player) = sim.get_player(id) {
                top_speed = top_speed.max(player.horizontal_speed());
            }
        }

        let player = sim.get_player(id).expect("player exists");
        assert_eq!(player.respawns, 0, "Should stay on the course");
        assert!(
            top_speed > sim.solver().config.move_speed,
            "Strafe-hopping should exceed ground speed, got {top_speed}"
        );
    }

    #[test]
    fn test_determinism() {
        let mut a = Simulation::test();
        let mut b = Simulation::test();
        a.add_player("A");
        b.add_player("A");

        for frame in 0..200 {
            let input = if frame < 40 { forward() } else { strafe_hop() };
            a.tick(&[input.clone()]);
            b.tick(&[input]);
        }

        assert_eq!(a.players[0].position(), b.players[0].position());
        assert_eq!(a.players[0].movement, b.players[0].movement);
    }

    #[test]
    fn test_drive_character_applies_velocity() {
        let level = Level::test_course();
        let solver = MovementSolver::default();
        let mut state = MovementState::new(&solver.config);
        let mut mover = FlatGroundMover::new(Vec3::new(0.0, 5.0, 0.0));

        let velocity = drive_character(
            &solver,
            &mut state,
            &mut mover,
            &level,
            &FrameInput::default(),
            0.02,
        );

        assert!(velocity.y < 0.0, "Falling");
        assert!((mover.position().y - (5.0 + velocity.y * 0.02)).abs() < 1e-6);
    }
}
