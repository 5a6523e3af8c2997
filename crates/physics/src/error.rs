use thiserror::Error;

use crate::types::Axis;

/// Construction-time validation failures.
///
/// The per-frame update never fails; every invariant it relies on is checked
/// here, once, when spheres and rooms are built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("sphere mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("sphere center and velocity must be finite")]
    NonFiniteState,
    #[error("room extent along {axis:?} is empty: min {min} >= max {max}")]
    DegenerateRoom { axis: Axis, min: f32, max: f32 },
    #[error("{field} must be positive and finite, got {value}")]
    InvalidConfig { field: &'static str, value: f32 },
    #[error("invalid spawn range for {field}: [{min}, {max}]")]
    InvalidSpawnRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}
