//! # Spherebox Application Logic
//!
//! The frame driver. [`run`] builds a [`SimulationContext`] from a scene file
//! (or the default Cornell box scene), then steps it once per frame, feeding
//! the simulation clock either measured wall-clock time or a fixed delta.
//!
//! With `--realtime` the loop is paced to 60 frames per second the way a
//! windowed front-end would be; otherwise it runs as fast as it can, which
//! is what tests and batch runs want.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use physics::integrator::clamp_dt;
use physics::{SimulationContext, Vec3};
use scene::Scene;

const TARGET_FPS: f32 = 60.0;

/// Command-line options for the frame driver
#[derive(Parser, Debug, Clone)]
#[command(name = "spherebox", version, about)]
pub struct Options {
    /// Scene file; the Cornell box with random spheres when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,
    /// Override the number of randomly placed spheres
    #[arg(long)]
    pub count: Option<usize>,
    /// Override the placement seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    pub frames: usize,
    /// Use a fixed frame delta in seconds instead of wall-clock time
    #[arg(long)]
    pub fixed_dt: Option<f32>,
    /// Pace the loop to 60 frames per second
    #[arg(long)]
    pub realtime: bool,
    /// Log progress every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    pub log_every: usize,
    /// Pause the simulation clock at this frame
    #[arg(long)]
    pub pause_at: Option<usize>,
    /// Resume the simulation clock at this frame
    #[arg(long)]
    pub resume_at: Option<usize>,
}

/// What the loop ended with
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub frames: usize,
    pub spheres: usize,
    pub time: f32,
    pub momentum: Vec3,
    pub kinetic_energy: f32,
}

/// Load the scene and apply command-line overrides.
///
/// # Errors
///
/// Fails if the scene cannot be read or describes an invalid simulation.
pub fn build_context(options: &Options) -> Result<SimulationContext> {
    let mut scene = match &options.scene {
        Some(path) => Scene::from_path(path)?,
        None => Scene::default(),
    };
    if let Some(count) = options.count {
        scene.spawn.count = count;
    }
    if let Some(seed) = options.seed {
        scene.seed = seed;
    }
    scene.into_context()
}

/// Run the frame loop.
///
/// # Errors
///
/// Fails on an invalid scene or a negative or non-finite `--fixed-dt`.
pub fn run(options: &Options) -> Result<Summary> {
    if let Some(dt) = options.fixed_dt {
        if !(dt.is_finite() && dt >= 0.0) {
            bail!("--fixed-dt must be a non-negative number of seconds, got {dt}");
        }
    }

    let mut sim = build_context(options)?;
    tracing::info!(
        spheres = sim.spheres.len(),
        frames = options.frames,
        fixed_dt = ?options.fixed_dt,
        "starting simulation loop"
    );

    let frame_duration = Duration::from_secs_f32(1.0 / TARGET_FPS);
    let mut last = Instant::now();

    for frame in 0..options.frames {
        let frame_start = Instant::now();

        if options.pause_at == Some(frame) {
            sim.clock.pause();
            tracing::info!(frame, "simulation paused");
        }
        if options.resume_at == Some(frame) {
            sim.clock.resume();
            tracing::info!(frame, "simulation resumed");
        }

        let elapsed = match options.fixed_dt {
            Some(dt) => Duration::from_secs_f32(clamp_dt(dt, sim.config.max_dt)),
            None => {
                let now = Instant::now();
                let elapsed = now - last;
                last = now;
                elapsed
            }
        };
        let frame_time = sim.frame(elapsed);

        if options.log_every > 0 && (frame + 1) % options.log_every == 0 {
            tracing::info!(
                frame = frame + 1,
                time = frame_time.time,
                dt = frame_time.delta,
                energy = sim.kinetic_energy(),
                "frame complete"
            );
        }
        for instance in sim.instances() {
            tracing::trace!(
                texture = instance.texture_index,
                translation = ?instance.model[3],
                "instance ready"
            );
        }

        if options.realtime {
            let spent = frame_start.elapsed();
            if spent < frame_duration {
                thread::sleep(frame_duration - spent);
            }
        }
    }

    let summary = Summary {
        frames: options.frames,
        spheres: sim.spheres.len(),
        time: sim.clock.time(),
        momentum: sim.total_momentum(),
        kinetic_energy: sim.kinetic_energy(),
    };
    tracing::info!(?summary, "simulation loop finished");
    Ok(summary)
}
