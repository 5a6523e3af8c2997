//! # Spherebox
//!
//! Rigid spheres bouncing around a closed rectangular room.
//!
//! ## Crates
//!
//! -   **[`physics`]:** the per-frame physics core. Collision detection between
//!     spheres and against the six room walls, elastic collision response,
//!     wall reflection and clamped time-step integration, all driven through
//!     an explicitly owned [`physics::SimulationContext`].
//! -   **[`scene`]:** JSON scene files describing the room, tuning constants
//!     and either an explicit sphere list or random placement parameters.
//! -   **`spherebox`:** this crate. The [`app`] module is the frame driver: it
//!     owns the loop, feeds wall-clock or fixed deltas to the simulation clock
//!     and reports progress through `tracing`. Rendering is left to whoever
//!     consumes [`physics::SimulationContext::instances`].

pub mod app;

pub use physics;
pub use scene;
