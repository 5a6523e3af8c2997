use serde::Deserialize;

use crate::error::PhysicsError;

/// Default conversion from simulation units to visible motion
pub const DEFAULT_VELOCITY_SCALE: f32 = 8.0;

/// Largest step a single frame may integrate, equivalent to 15 fps at 60 Hz
pub const DEFAULT_MAX_DT: f32 = 15.0 / 60.0;

/// Tuning constants for the frame update
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysConfig {
    pub velocity_scale: f32,
    pub max_dt: f32,
}

impl Default for PhysConfig {
    fn default() -> Self {
        Self {
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            max_dt: DEFAULT_MAX_DT,
        }
    }
}

impl PhysConfig {
    /// Check that both constants are positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        for (field, value) in [
            ("velocity_scale", self.velocity_scale),
            ("max_dt", self.max_dt),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PhysicsError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PhysConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_or_non_finite() {
        let config = PhysConfig {
            max_dt: -1.0,
            ..PhysConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PhysicsError::InvalidConfig {
                field: "max_dt",
                value: -1.0
            })
        );

        let config = PhysConfig {
            velocity_scale: f32::INFINITY,
            ..PhysConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PhysicsError::InvalidConfig {
                field: "velocity_scale",
                ..
            })
        ));
    }
}
