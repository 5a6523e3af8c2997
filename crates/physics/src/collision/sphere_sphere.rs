//! Sphere-sphere collision detection and elastic response

use crate::types::{Sphere, Vec3};

impl Sphere {
    /// Two spheres collide when the distance between their centers is no
    /// greater than the sum of their radii. A sphere never collides with
    /// itself.
    #[must_use]
    pub fn collides_with(&self, other: &Sphere) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        (self.center - other.center).length() <= self.radius + other.radius
    }
}

/// Apply a frictionless elastic collision between `a` and `b`.
///
/// Only the velocity components along the line of centers are exchanged;
/// tangential components are kept. Pairs that are not touching, already
/// separating, or whose centers coincide are left alone.
///
/// Returns `true` when the velocities were updated.
pub fn resolve_elastic(a: &mut Sphere, b: &mut Sphere) -> bool {
    if !a.collides_with(b) {
        return false;
    }

    // Normal pointing from b towards a
    let Some(normal) = (a.center - b.center).try_normalize() else {
        return false;
    };

    let u1 = a.velocity;
    let u2 = b.velocity;
    if normal.dot(u1 - u2) >= 0.0 {
        return false;
    }

    let u1n = normal * u1.dot(normal);
    let u2n = normal * u2.dot(normal);
    let u1t = u1 - u1n;
    let u2t = u2 - u2n;
    let (m1, m2) = (a.mass, b.mass);
    let total = m1 + m2;

    a.velocity = elastic_normal(u1n, u2n, m1, m2, total) + u1t;
    b.velocity = elastic_normal(u2n, u1n, m2, m1, total) + u2t;

    tracing::trace!(
        a = a.texture_index,
        b = b.texture_index,
        "elastic collision resolved"
    );
    true
}

/// One-dimensional elastic collision formula for the body with mass `m1`
fn elastic_normal(u1n: Vec3, u2n: Vec3, m1: f32, m2: f32, total: f32) -> Vec3 {
    (u1n * (m1 - m2) + u2n * (2.0 * m2)) / total
}

/// Borrow two distinct elements of `spheres` mutably
///
/// # Panics
///
/// Panics if `i == j` or either index is out of bounds.
pub(crate) fn pair_mut(spheres: &mut [Sphere], i: usize, j: usize) -> (&mut Sphere, &mut Sphere) {
    assert_ne!(i, j, "a sphere cannot be paired with itself");
    if i < j {
        let (before, after) = spheres.split_at_mut(j);
        (&mut before[i], &mut after[0])
    } else {
        let (before, after) = spheres.split_at_mut(i);
        (&mut after[0], &mut before[j])
    }
}
