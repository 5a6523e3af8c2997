#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_truncation)]
//! # Spherebox Physics
//!
//! The per-frame physics of rigid spheres bouncing around a closed
//! rectangular room: sphere-sphere and sphere-wall collision detection,
//! frictionless elastic collision response, wall reflection, and clamped
//! time-step integration.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Sphere`] and the static [`Plane`] walls, in [`types`].
//! -   **Room:** [`Room`] builds the six named walls ([`Wall`]) of a box.
//! -   **Population:** [`populate`] places non-overlapping random spheres.
//! -   **Simulation:** [`SimulationContext`] owns the room, spheres, tuning
//!     constants and a pausable clock, and advances them one frame at a time.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{PhysConfig, Room, SimulationContext, SpawnConfig};
//!
//! let mut sim = SimulationContext::populated(
//!     Room::cornell_box(),
//!     &SpawnConfig::default(),
//!     PhysConfig::default(),
//!     42,
//! )?;
//! sim.run(1.0 / 60.0, 120);
//! assert!(sim.spheres.len() <= 9);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

mod builder;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod integrator;
pub mod population;
pub mod room;
pub mod simulation;
pub mod transform;
pub mod types;

pub use clock::{FrameTime, SimClock};
pub use config::PhysConfig;
pub use error::PhysicsError;
pub use population::{populate, SpawnConfig};
pub use room::{Room, Wall};
pub use simulation::{update_sphere, SimulationContext};
pub use transform::SphereInstance;
pub use types::{Axis, Plane, Sphere, Vec3};
