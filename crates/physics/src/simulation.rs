//! # Physics Simulation Core
//!
//! [`SimulationContext`] owns everything the per-frame update touches: the
//! room, the sphere list, the tuning constants and the clock. It is built
//! once at startup and handed to the frame driver by `&mut` every frame.
//!
//! Spheres are updated one at a time in list order. Each update reads the
//! current state of every other sphere, including changes made earlier in
//! the same frame, so results depend on list order when more than two
//! spheres overlap at once.

use std::time::Duration;

use crate::clock::{FrameTime, SimClock};
use crate::collision::{bounce_walls, pair_mut, resolve_elastic};
use crate::config::PhysConfig;
use crate::error::PhysicsError;
use crate::integrator::{advance, clamp_dt};
use crate::population::{populate, SpawnConfig};
use crate::room::Room;
use crate::transform::{model_matrix, sphere_uniform, SphereInstance};
use crate::types::{Sphere, Vec3};

#[derive(Debug)]
pub struct SimulationContext {
    pub room: Room,
    pub spheres: Vec<Sphere>,
    pub config: PhysConfig,
    pub clock: SimClock,
}

impl SimulationContext {
    /// Create a context around an explicit sphere list
    #[must_use]
    pub fn new(room: Room, spheres: Vec<Sphere>, config: PhysConfig) -> Self {
        Self {
            room,
            spheres,
            config,
            clock: SimClock::new(),
        }
    }

    /// Create a context with randomly placed spheres.
    ///
    /// # Errors
    ///
    /// Returns an error if `spawn` is invalid. Placing fewer spheres than
    /// requested is not an error.
    pub fn populated(
        room: Room,
        spawn: &SpawnConfig,
        config: PhysConfig,
        seed: u64,
    ) -> Result<Self, PhysicsError> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let spheres = populate(spawn, &mut rng)?;
        tracing::info!(spheres = spheres.len(), seed, "simulation populated");
        Ok(Self::new(room, spheres, config))
    }

    /// Update a single sphere for one frame.
    ///
    /// Bounces it off the walls, resolves elastic collisions against every
    /// other sphere in list order, then moves it by its velocity over the
    /// clamped delta and rebuilds its transform.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn update_sphere(&mut self, index: usize, time: f32, dt: f32) {
        update_sphere(&mut self.spheres, index, time, dt, &self.room, &self.config);
    }

    /// Update every sphere for one frame, in list order
    pub fn step(&mut self, time: f32, dt: f32) {
        for index in 0..self.spheres.len() {
            self.update_sphere(index, time, dt);
        }
    }

    /// Advance the clock by `elapsed` wall-clock time and step with the
    /// resulting frame time
    pub fn frame(&mut self, elapsed: Duration) -> FrameTime {
        let frame_time = self.clock.advance(elapsed);
        self.step(frame_time.time, frame_time.delta);
        frame_time
    }

    /// Run `frames` fixed-size frames. A `dt` beyond `config.max_dt` runs
    /// as `max_dt`.
    pub fn run(&mut self, dt: f32, frames: usize) {
        let elapsed = Duration::from_secs_f32(clamp_dt(dt, self.config.max_dt));
        for _ in 0..frames {
            self.frame(elapsed);
        }
    }

    #[must_use]
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.spheres.iter().map(SphereInstance::from).collect()
    }

    #[must_use]
    pub fn sphere_uniforms(&self) -> Vec<[f32; 4]> {
        self.spheres.iter().map(sphere_uniform).collect()
    }

    #[must_use]
    pub fn total_momentum(&self) -> Vec3 {
        self.spheres
            .iter()
            .fold(Vec3::ZERO, |acc, s| acc + s.momentum())
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        self.spheres.iter().map(Sphere::kinetic_energy).sum()
    }
}

/// Per-frame update of `spheres[index]` against the room and all other
/// spheres. Free-standing so callers that own their sphere list can drive it
/// without a [`SimulationContext`].
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn update_sphere(
    spheres: &mut [Sphere],
    index: usize,
    time: f32,
    dt: f32,
    room: &Room,
    config: &PhysConfig,
) {
    let dt = clamp_dt(dt, config.max_dt);

    bounce_walls(&mut spheres[index], room);

    for other in 0..spheres.len() {
        if other == index {
            continue;
        }
        let (this, that) = pair_mut(spheres, index, other);
        resolve_elastic(this, that);
    }

    let sphere = &mut spheres[index];
    advance(sphere, dt, config.velocity_scale);
    sphere.spin_angle = time;
    sphere.transform = model_matrix(sphere.center, sphere.radius);
}
