//! # Physics Integration
//!
//! Explicit Euler position update with a clamped time step. No forces act on
//! the spheres, so velocities only change through collision response.

use crate::types::Sphere;

/// Clamp a frame delta to `[0, max_dt]`.
///
/// A long stall is capped at `max_dt`; a negative delta (clock reset) is
/// treated as no time passing.
#[must_use]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, max_dt.max(0.0))
}

/// Move the sphere center along its velocity
pub fn advance(sphere: &mut Sphere, dt: f32, velocity_scale: f32) {
    sphere.center += sphere.velocity * (dt * velocity_scale);
}
