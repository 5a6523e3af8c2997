//! Transform matrix utilities for the renderer hand-off
//!
//! The sphere mesh is built with its poles on the local z axis. Two fixed
//! quarter turns bring the poles onto world y so texture seams line up, then
//! the mesh is scaled by the radius and moved to the sphere center.

use glam::{Mat4, Vec3 as GlamVec3, Vec4};

use crate::types::{Sphere, Vec3};

/// Quarter turn about x: local y -> -z, local z -> y
const X_QUARTER_TURN: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, -1.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Quarter turn about z: local x -> y, local y -> -x
const Z_QUARTER_TURN: Mat4 = Mat4::from_cols(
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(-1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 1.0, 0.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Fixed correction applied to the unit sphere mesh before scaling
#[must_use]
pub fn axis_remap() -> Mat4 {
    X_QUARTER_TURN * Z_QUARTER_TURN
}

/// Model matrix `T(center) * S(radius) * remap`, column-major
#[must_use]
pub fn model_matrix(center: Vec3, radius: f32) -> [[f32; 4]; 4] {
    let transform = Mat4::from_translation(GlamVec3::from(center))
        * Mat4::from_scale(GlamVec3::splat(radius))
        * axis_remap();
    transform.to_cols_array_2d()
}

/// Per-sphere data a renderer needs to draw one textured mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub model: [[f32; 4]; 4],
    pub texture_index: u32,
    pub _pad: [u32; 3],
}

impl From<&Sphere> for SphereInstance {
    fn from(sphere: &Sphere) -> Self {
        Self {
            model: sphere.transform,
            texture_index: sphere.texture_index,
            _pad: [0; 3],
        }
    }
}

/// Center and radius packed as `[x, y, z, r]`, the layout shadow shaders expect
#[must_use]
pub fn sphere_uniform(sphere: &Sphere) -> [f32; 4] {
    let c = sphere.center;
    [c.x, c.y, c.z, sphere.radius]
}
