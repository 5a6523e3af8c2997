//! # Sphere Population
//!
//! Random, non-overlapping placement of the initial spheres. Each attempt
//! draws one candidate; candidates touching an accepted sphere are thrown
//! away. Running out of attempts is not an error, the room simply ends up
//! with fewer spheres.

use serde::Deserialize;

use crate::error::PhysicsError;
use crate::types::{Sphere, Vec3};

/// Parameters for [`populate`]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Number of spheres wanted
    pub count: usize,
    /// Candidates drawn before giving up
    pub max_attempts: usize,
    pub radius: [f32; 2],
    pub center_min: [f32; 3],
    pub center_max: [f32; 3],
    /// Range for each velocity component
    pub velocity: [f32; 2],
    pub mass: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 9,
            max_attempts: 1024,
            radius: [10.0, 80.0],
            center_min: [100.0, 100.0, -400.0],
            center_max: [400.0, 400.0, -100.0],
            velocity: [-30.0, 30.0],
            mass: 1.0,
        }
    }
}

impl SpawnConfig {
    /// Check every range before any sphere is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidSpawnRange`] for inverted or non-finite
    /// ranges and for a radius range that is not strictly positive, and
    /// [`PhysicsError::InvalidMass`] for a non-positive mass.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        check_range("radius", self.radius[0], self.radius[1])?;
        if self.radius[0] <= 0.0 {
            return Err(PhysicsError::InvalidSpawnRange {
                field: "radius",
                min: self.radius[0],
                max: self.radius[1],
            });
        }
        for (field, i) in [("center.x", 0), ("center.y", 1), ("center.z", 2)] {
            check_range(field, self.center_min[i], self.center_max[i])?;
        }
        check_range("velocity", self.velocity[0], self.velocity[1])?;
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::InvalidMass(self.mass));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, min: f32, max: f32) -> Result<(), PhysicsError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(PhysicsError::InvalidSpawnRange { field, min, max })
    }
}

fn sample(rng: &mut fastrand::Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.f32()
}

fn sample_vec(rng: &mut fastrand::Rng, min: [f32; 3], max: [f32; 3]) -> Vec3 {
    Vec3::new(
        sample(rng, min[0], max[0]),
        sample(rng, min[1], max[1]),
        sample(rng, min[2], max[2]),
    )
}

/// Draw up to `config.count` non-overlapping spheres.
///
/// Accepted spheres are tagged with their acceptance order in
/// `texture_index`.
///
/// # Errors
///
/// Only an invalid `config` is an error; a shortfall is logged and the
/// spheres placed so far are returned.
pub fn populate(config: &SpawnConfig, rng: &mut fastrand::Rng) -> Result<Vec<Sphere>, PhysicsError> {
    config.validate()?;

    let mut spheres: Vec<Sphere> = Vec::with_capacity(config.count);
    let [v_min, v_max] = config.velocity;
    let mut attempts = 0;

    while attempts < config.max_attempts && spheres.len() < config.count {
        attempts += 1;

        let radius = sample(rng, config.radius[0], config.radius[1]);
        let center = sample_vec(rng, config.center_min, config.center_max);
        let mut candidate = Sphere::with_mass(center, radius, Vec3::ZERO, config.mass)?;

        if spheres.iter().any(|accepted| accepted.collides_with(&candidate)) {
            continue;
        }

        candidate.velocity = sample_vec(rng, [v_min; 3], [v_max; 3]);
        candidate.texture_index = u32::try_from(spheres.len()).unwrap_or(u32::MAX);
        spheres.push(candidate);
    }

    if spheres.len() < config.count {
        tracing::warn!(
            requested = config.count,
            placed = spheres.len(),
            attempts,
            "sphere placement ran out of attempts"
        );
    } else {
        tracing::debug!(placed = spheres.len(), attempts, "spheres placed");
    }

    Ok(spheres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_places_nine_disjoint_spheres() {
        let mut rng = fastrand::Rng::with_seed(7);
        let spheres = populate(&SpawnConfig::default(), &mut rng).unwrap();
        assert!(spheres.len() <= 9);
        for (i, a) in spheres.iter().enumerate() {
            assert_eq!(a.texture_index as usize, i);
            assert!((10.0..=80.0).contains(&a.radius));
            for b in &spheres[i + 1..] {
                assert!((a.center - b.center).length() > a.radius + b.radius);
            }
        }
    }

    #[test]
    fn same_seed_same_spheres() {
        let config = SpawnConfig::default();
        let a = populate(&config, &mut fastrand::Rng::with_seed(99)).unwrap();
        let b = populate(&config, &mut fastrand::Rng::with_seed(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn crowded_box_falls_short_without_error() {
        let config = SpawnConfig {
            count: 50,
            max_attempts: 200,
            radius: [5.0, 5.0],
            center_min: [0.0; 3],
            center_max: [1.0; 3],
            ..SpawnConfig::default()
        };
        let spheres = populate(&config, &mut fastrand::Rng::with_seed(1)).unwrap();
        assert_eq!(spheres.len(), 1);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = SpawnConfig {
            velocity: [1.0, -1.0],
            ..SpawnConfig::default()
        };
        let err = populate(&config, &mut fastrand::Rng::with_seed(1)).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidSpawnRange { field: "velocity", .. }));
    }
}
