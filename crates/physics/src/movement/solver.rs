//! Per-frame movement solver.
//!
//! This is the main entry point for player movement. It takes the host's
//! frame input and grounded flag, updates the [`MovementState`], and returns
//! the velocity the host should apply as `velocity * delta_time`.

use glam::Vec3;

use super::accelerate::{accelerate, air_accelerate, apply_friction, wish_direction, wish_velocity};
use super::config::MovementConfig;
use super::state::{FrameInput, MovementState};

/// Standard gravity (meters/second²), pointing down.
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Bunny-hop movement solver.
///
/// Handles:
/// - Ground movement with friction and acceleration
/// - Air movement with capped wish speed and gravity
/// - One-frame jump buffering and landing/ledge edge detection
///
/// The solver holds only read-only configuration; per-character data lives in
/// [`MovementState`], so one solver can drive any number of characters.
///
/// # Example
///
/// ```
/// use bhop_physics::{FrameInput, MovementConfig, MovementSolver, MovementState};
/// use glam::Vec2;
///
/// let solver = MovementSolver::new(MovementConfig::default());
/// let mut state = MovementState::new(&solver.config);
///
/// // Each frame:
/// let input = FrameInput::new(Vec2::new(0.0, 1.0), false);
/// let velocity = solver.step(&mut state, &input, true, 0.02);
/// assert!(velocity.length() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MovementSolver {
    /// Movement configuration.
    pub config: MovementConfig,

    /// Gravity acceleration supplied by the host environment.
    pub gravity: Vec3,
}

impl MovementSolver {
    /// Create a new solver with the given configuration and standard gravity.
    pub fn new(config: MovementConfig) -> Self {
        Self::with_gravity(config, DEFAULT_GRAVITY)
    }

    /// Create a solver with an explicit gravity vector.
    pub fn with_gravity(config: MovementConfig, gravity: Vec3) -> Self {
        Self { config, gravity }
    }

    /// Create a solver with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(MovementConfig::default())
    }

    /// Reinitialize a state, e.g. when movement is re-enabled.
    pub fn reset(&self, state: &mut MovementState) {
        *state = MovementState::new(&self.config);
    }

    /// Select a friction preset by index.
    ///
    /// Out-of-range indices are ignored and leave the state unchanged.
    /// Returns true if the preset was applied.
    pub fn set_friction(&self, state: &mut MovementState, index: i32) -> bool {
        match self.config.friction_preset(index) {
            Some(friction) => {
                state.friction_coefficient = friction;
                true
            }
            None => {
                log::debug!(
                    "ignoring friction preset {} (have {})",
                    index,
                    self.config.preset_count()
                );
                false
            }
        }
    }

    /// Advance movement by one frame.
    ///
    /// # Arguments
    ///
    /// * `state` - The character's movement state (will be modified)
    /// * `input` - Input for this frame
    /// * `grounded` - Whether the host reports the body on walkable ground
    /// * `delta_time` - Frame time in seconds; expected to be non-negative
    ///
    /// # Returns
    ///
    /// The new velocity, also stored in `state.velocity`.
    pub fn step(
        &self,
        state: &mut MovementState,
        input: &FrameInput,
        grounded: bool,
        delta_time: f32,
    ) -> Vec3 {
        state.jump.latch(input.jump_pressed);

        self.detect_ground_transitions(state, grounded);

        let axis = input.clamped_axis();
        let wish = wish_velocity(axis, input.forward, input.right, self.config.move_speed);

        if grounded {
            self.ground_move(state, wish, delta_time);
        } else {
            self.air_move(state, wish, delta_time);
        }

        // An unused request never survives the frame
        state.jump.clear_queue();
        state.was_grounded = grounded;

        state.velocity
    }

    // ========================================================================
    // Ground Detection
    // ========================================================================

    fn detect_ground_transitions(&self, state: &mut MovementState, grounded: bool) {
        if !state.was_grounded && grounded {
            log::debug!("landed: vertical speed {:.3}", state.velocity.y);
            state.velocity.y = 0.0;
            state.jump.land();
        }

        // Walked off a ledge: drop the stick-to-ground bias
        if !grounded && !state.jump.is_jumping() && state.was_grounded {
            state.velocity.y = 0.0;
        }
    }

    // ========================================================================
    // Ground Movement
    // ========================================================================

    fn ground_move(&self, state: &mut MovementState, wish: Vec3, delta_time: f32) {
        let friction = apply_friction(
            state.horizontal_velocity(),
            state.friction_coefficient,
            delta_time,
        );
        let previous = friction.velocity;
        let wish = wish - friction.blend * previous;

        let (direction, speed) = wish_direction(wish);

        let mut next = accelerate(
            previous,
            direction,
            speed,
            self.config.ground_accel,
            delta_time,
        );
        next.y = -self.config.stick_to_ground_force;

        if state.jump.trigger() {
            log::debug!("jump: horizontal speed {:.3}", previous.length());
            next.y = self.config.jump_speed;
        }

        state.velocity = next;
    }

    // ========================================================================
    // Air Movement
    // ========================================================================

    fn air_move(&self, state: &mut MovementState, wish: Vec3, delta_time: f32) {
        let (direction, speed) = wish_direction(wish);

        let mut next = air_accelerate(
            state.horizontal_velocity(),
            direction,
            speed,
            self.config.air_accel,
            self.config.max_air_speed,
            delta_time,
        );
        next.y = state.velocity.y;
        next += self.gravity * self.config.gravity_multiplier * delta_time;

        state.velocity = next;
    }
}

impl Default for MovementSolver {
    fn default() -> Self {
        Self::with_default_config()
    }
}

// ============================================================================
// Tests
// ============================================================================
