//! Acceleration and friction primitives.
//!
//! These are the Quake `PM_Accelerate` / `PM_Friction` building blocks,
//! operating on horizontal velocity only.

use glam::{Vec2, Vec3};

/// Velocity the input alone would produce, before acceleration limiting.
///
/// `axis.y` drives along `forward`, `axis.x` along `right`.
#[inline]
pub fn wish_velocity(axis: Vec2, forward: Vec3, right: Vec3, move_speed: f32) -> Vec3 {
    move_speed * (forward * axis.y + right * axis.x)
}

/// Split a wish velocity into direction and speed.
///
/// A zero vector yields a zero direction, never NaN.
#[inline]
pub fn wish_direction(wish_velocity: Vec3) -> (Vec3, f32) {
    (wish_velocity.normalize_or_zero(), wish_velocity.length())
}

/// Move `velocity` toward `wish_speed` along `wish_direction`.
///
/// Only the component of velocity along the wish direction is limited, so
/// adding speed perpendicular to the current velocity always succeeds. That
/// is what makes air strafing gain speed.
pub fn accelerate(
    velocity: Vec3,
    wish_direction: Vec3,
    wish_speed: f32,
    acceleration: f32,
    delta_time: f32,
) -> Vec3 {
    // Current speed in the wish direction
    let current_speed = velocity.dot(wish_direction);

    // How much more speed we need
    let add_speed = wish_speed - current_speed;
    if add_speed <= 0.0 {
        return velocity;
    }

    let accel_speed = (acceleration * wish_speed * delta_time).min(add_speed);

    velocity + accel_speed * wish_direction
}

/// Air variant of [`accelerate`]: the wish speed is capped first.
///
/// The cap bounds the speed gained along the wish direction, not the
/// resulting velocity magnitude.
pub fn air_accelerate(
    velocity: Vec3,
    wish_direction: Vec3,
    wish_speed: f32,
    acceleration: f32,
    max_air_speed: f32,
    delta_time: f32,
) -> Vec3 {
    accelerate(
        velocity,
        wish_direction,
        wish_speed.min(max_air_speed),
        acceleration,
        delta_time,
    )
}

/// Result of applying ground friction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionResult {
    /// Velocity after friction.
    pub velocity: Vec3,

    /// Multiple of the slowed velocity to subtract from the wish velocity.
    ///
    /// `1 - new_speed / speed` when friction slowed the body. When it removed
    /// nothing this is `1 - speed`, which pulls the wish toward the current
    /// velocity instead.
    pub blend: f32,
}

/// Apply speed-proportional friction to a horizontal velocity.
///
/// A stationary velocity is returned untouched with no blend.
pub fn apply_friction(velocity: Vec3, friction: f32, delta_time: f32) -> FrictionResult {
    let speed = velocity.length();
    if speed == 0.0 {
        return FrictionResult {
            velocity,
            blend: 0.0,
        };
    }

    let drop = speed * friction * delta_time;
    let mut new_speed = (speed - drop).max(0.0);

    let mut velocity = velocity;
    if new_speed != speed {
        new_speed /= speed;
        velocity *= new_speed;
    }

    FrictionResult {
        velocity,
        blend: 1.0 - new_speed,
    }
}
