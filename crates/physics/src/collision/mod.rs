//! # Collision Detection and Response
//!
//! Exhaustive pairwise checks between spheres and against the six room
//! walls. Responses act on velocities only; overlaps are resolved by the
//! spheres moving apart on later frames, never by position correction.

mod sphere_sphere;
mod sphere_plane;

pub use sphere_sphere::*;
pub use sphere_plane::*;

pub(crate) use sphere_sphere::pair_mut;
