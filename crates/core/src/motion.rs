//! Motion model for the ship.
//!
//! Velocity is measured in cells per control cycle. Call [`update_velocity`]
//! once per control cycle, never per rendered frame, so that the motion rate
//! does not depend on the animation rate.

/// Speeds below this magnitude are snapped to rest.
pub const REST_EPSILON: f64 = 1e-3;

/// Update one axis: damp the carried speed, add acceleration, clamp.
pub fn update_axis(speed: f64, acceleration: f64, max_speed: f64, damping: f64) -> f64 {
    let max_speed = max_speed.abs();
    let next = (speed * damping + acceleration).clamp(-max_speed, max_speed);
    if next.abs() < REST_EPSILON {
        0.0
    } else {
        next
    }
}

/// Update a `(row, col)` velocity.
///
/// With zero acceleration the velocity decays geometrically to rest.
/// Under constant acceleration `a` it converges to `a / (1 - damping)`,
/// bounded by `max_speed`.
pub fn update_velocity(
    velocity: (f64, f64),
    acceleration: (f64, f64),
    max_speed: f64,
    damping: f64,
) -> (f64, f64) {
    (
        update_axis(velocity.0, acceleration.0, max_speed, damping),
        update_axis(velocity.1, acceleration.1, max_speed, damping),
    )
}
