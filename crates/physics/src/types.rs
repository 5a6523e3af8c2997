//! # Core Physics Types
//!
//! Plain data types shared by every stage of the frame update: a small
//! `Vec3`, the dynamic [`Sphere`] body and the static [`Plane`] used for
//! the room walls.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::PhysicsError;

/// Coordinate axis of the room frame
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Unit vector along `axis`
    #[must_use]
    pub const fn unit(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
            Axis::Z => Self::Z,
        }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector in the direction of `self`, or `None` when the
    /// length is zero or the result would not be finite.
    #[must_use]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[must_use]
    pub const fn axis(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A rigid sphere bouncing around the room.
///
/// `radius` and `mass` are fixed for the lifetime of the sphere. Only
/// `center`, `velocity`, `spin_angle` and `transform` change, once per frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub velocity: Vec3,
    pub mass: f32,
    /// Cosmetic rotation parameter, set to the simulation time each frame
    pub spin_angle: f32,
    /// Render-only tag, the order in which the sphere was accepted
    pub texture_index: u32,
    /// Column-major model matrix derived by the last update
    pub transform: [[f32; 4]; 4],
}

impl Sphere {
    /// Create a sphere with unit mass.
    ///
    /// # Errors
    ///
    /// See [`Sphere::with_mass`].
    pub fn new(center: Vec3, radius: f32, velocity: Vec3) -> Result<Self, PhysicsError> {
        Self::with_mass(center, radius, velocity, 1.0)
    }

    /// Create a sphere with an explicit mass.
    ///
    /// # Errors
    ///
    /// Returns an error when `radius` or `mass` is not a positive finite
    /// number, or when `center`/`velocity` are not finite.
    pub fn with_mass(
        center: Vec3,
        radius: f32,
        velocity: Vec3,
        mass: f32,
    ) -> Result<Self, PhysicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !center.is_finite() || !velocity.is_finite() {
            return Err(PhysicsError::NonFiniteState);
        }
        Ok(Self {
            center,
            radius,
            velocity,
            mass,
            spin_angle: 0.0,
            texture_index: 0,
            transform: crate::transform::model_matrix(center, radius),
        })
    }

    #[must_use]
    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// A static half-space bounding the room.
///
/// `normal` points into the room interior; a point `p` is inside when
/// `normal.dot(p) - distance >= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    #[must_use]
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Signed distance from `point` to the plane along the normal
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(Vec3::ZERO.try_normalize().is_none());
        let n = Vec3::new(3.0, 0.0, 4.0).try_normalize().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_rejects_bad_radius_and_mass() {
        assert!(matches!(
            Sphere::new(Vec3::ZERO, 0.0, Vec3::ZERO),
            Err(PhysicsError::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::with_mass(Vec3::ZERO, 1.0, Vec3::ZERO, -2.0),
            Err(PhysicsError::InvalidMass(_))
        ));
        assert!(matches!(
            Sphere::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0, Vec3::ZERO),
            Err(PhysicsError::NonFiniteState)
        ));
    }

    #[test]
    fn axis_access_round_trips() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        *v.axis_mut(Axis::Y) *= -1.0;
        assert_eq!(v.axis(Axis::Y), -2.0);
        assert_eq!(v.axis(Axis::Z), 3.0);
    }
}
