//! # Simulation Builder
//!
//! Methods for adding spheres to a [`SimulationContext`] one at a time, as
//! scene files do when they list spheres explicitly.

use crate::error::PhysicsError;
use crate::types::{Sphere, Vec3};
use crate::SimulationContext;

impl SimulationContext {
    /// Add a unit-mass sphere, returning its index.
    ///
    /// # Errors
    ///
    /// Fails if `radius` is not positive or the state is not finite.
    pub fn add_sphere(&mut self, center: Vec3, velocity: Vec3, radius: f32) -> Result<usize, PhysicsError> {
        self.add_sphere_with_mass(center, velocity, radius, 1.0)
    }

    /// Add a sphere with an explicit mass, returning its index.
    ///
    /// The sphere is tagged with its index as `texture_index`. Overlap with
    /// spheres already present is allowed; it resolves on the first frames.
    ///
    /// # Errors
    ///
    /// Fails if `radius` or `mass` is not positive or the state is not finite.
    pub fn add_sphere_with_mass(
        &mut self,
        center: Vec3,
        velocity: Vec3,
        radius: f32,
        mass: f32,
    ) -> Result<usize, PhysicsError> {
        let index = self.spheres.len();
        let mut sphere = Sphere::with_mass(center, radius, velocity, mass)?;
        sphere.texture_index = u32::try_from(index).unwrap_or(u32::MAX);
        self.spheres.push(sphere);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::{PhysConfig, Room, SimulationContext, Vec3};

    #[test]
    fn add_sphere_returns_index() {
        let mut sim = SimulationContext::new(Room::cornell_box(), Vec::new(), PhysConfig::default());
        let a = sim.add_sphere(Vec3::new(100.0, 100.0, -100.0), Vec3::ZERO, 10.0).unwrap();
        let b = sim
            .add_sphere_with_mass(Vec3::new(300.0, 100.0, -100.0), Vec3::X, 20.0, 3.0)
            .unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(sim.spheres[1].texture_index, 1);
        assert_eq!(sim.spheres[1].mass, 3.0);
        assert!(sim.add_sphere(Vec3::ZERO, Vec3::ZERO, -1.0).is_err());
        assert_eq!(sim.spheres.len(), 2);
    }
}
