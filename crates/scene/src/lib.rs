#![deny(clippy::all, clippy::pedantic)]
//! # Scene Descriptions
//!
//! JSON files describing a room and its spheres. A scene either lists its
//! spheres explicitly or leaves placement to random population:
//!
//! ```json
//! {
//!     "room": { "min": [0, 0, -559.2], "max": [556, 548.8, 0] },
//!     "physics": { "velocity_scale": 8.0, "max_dt": 0.25 },
//!     "spawn": { "count": 9 },
//!     "seed": 42
//! }
//! ```
//!
//! Every section is optional; missing ones fall back to the Cornell box
//! scene with nine random spheres.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use physics::{PhysConfig, Room, SimulationContext, SpawnConfig, Vec3};
use serde::Deserialize;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Scene {
    #[serde(default)]
    pub room: Option<RoomDef>,
    #[serde(default)]
    pub physics: PhysConfig,
    #[serde(default)]
    pub spawn: SpawnConfig,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Explicit spheres; when non-empty, random population is skipped
    #[serde(default)]
    pub spheres: Vec<SphereDef>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RoomDef {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SphereDef {
    pub center: [f32; 3],
    pub radius: f32,
    #[serde(default = "zero_vec")]
    pub velocity: [f32; 3],
    #[serde(default = "unit_mass")]
    pub mass: f32,
}

fn zero_vec() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn unit_mass() -> f32 {
    1.0
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            room: None,
            physics: PhysConfig::default(),
            spawn: SpawnConfig::default(),
            seed: DEFAULT_SEED,
            spheres: Vec::new(),
        }
    }
}

impl FromStr for Scene {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Scene {
    /// Read and parse a scene file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid scene.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        json.parse::<Self>()
            .with_context(|| format!("failed to parse scene {}", path.display()))
    }

    /// Build the room described by the scene, the Cornell box by default.
    ///
    /// # Errors
    ///
    /// Fails if the room bounds are degenerate.
    pub fn build_room(&self) -> Result<Room> {
        match self.room {
            Some(def) => Ok(Room::from_bounds(def.min.into(), def.max.into())?),
            None => Ok(Room::cornell_box()),
        }
    }

    /// Build the simulation context for this scene.
    ///
    /// # Errors
    ///
    /// Fails on degenerate room bounds, invalid physics constants, invalid
    /// spheres or an invalid spawn configuration.
    pub fn into_context(self) -> Result<SimulationContext> {
        let room = self.build_room()?;
        self.physics
            .validate()
            .context("invalid physics configuration")?;

        if self.spheres.is_empty() {
            return SimulationContext::populated(room, &self.spawn, self.physics, self.seed)
                .context("failed to populate spheres");
        }

        let mut sim = SimulationContext::new(room, Vec::new(), self.physics);
        for (i, def) in self.spheres.iter().enumerate() {
            sim.add_sphere_with_mass(
                Vec3::from(def.center),
                Vec3::from(def.velocity),
                def.radius,
                def.mass,
            )
            .with_context(|| format!("invalid sphere #{i}"))?;
        }
        tracing::info!(spheres = sim.spheres.len(), "scene loaded with explicit spheres");
        Ok(sim)
    }
}
