//! Sphere-plane collision detection and wall bounce response

use crate::room::{Room, Wall};
use crate::types::{Plane, Sphere};

/// Distance from the sphere center to `plane` along its normal
#[must_use]
pub fn center_distance(sphere: &Sphere, plane: &Plane) -> f32 {
    plane.signed_distance(sphere.center)
}

/// How far the sphere surface has crossed `plane`; positive means overlap
#[must_use]
pub fn penetration_excess(sphere: &Sphere, plane: &Plane) -> f32 {
    sphere.radius - center_distance(sphere, plane)
}

/// A sphere collides with a plane when its radius exceeds the distance from
/// its center to the plane. Depth does not matter.
#[must_use]
pub fn collides_with_plane(sphere: &Sphere, plane: &Plane) -> bool {
    penetration_excess(sphere, plane) > 0.0
}

/// Walls a sphere bounced off during one [`bounce_walls`] pass
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bounces {
    walls: [Option<Wall>; 3],
}

impl Bounces {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn contains(&self, wall: Wall) -> bool {
        self.walls.contains(&Some(wall))
    }

    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        self.walls.iter().flatten().copied()
    }
}

/// Reflect the sphere's velocity off the room walls.
///
/// For each axis the two opposing walls are checked in order; a wall only
/// reflects when the sphere overlaps it and the velocity along that axis
/// points into it. At most one reflection happens per axis.
pub fn bounce_walls(sphere: &mut Sphere, room: &Room) -> Bounces {
    let mut bounces = Bounces::default();

    for (slot, (first, second)) in Wall::AXIS_PAIRS.into_iter().enumerate() {
        let hit = if heading_into(sphere, room, first) {
            Some(first)
        } else if heading_into(sphere, room, second) {
            Some(second)
        } else {
            None
        };

        if let Some(wall) = hit {
            *sphere.velocity.axis_mut(wall.axis()) *= -1.0;
            tracing::trace!(sphere = sphere.texture_index, ?wall, "wall bounce");
            bounces.walls[slot] = Some(wall);
        }
    }

    bounces
}

fn heading_into(sphere: &Sphere, room: &Room, wall: Wall) -> bool {
    let plane = room.plane(wall);
    let axis = wall.axis();
    collides_with_plane(sphere, plane) && sphere.velocity.axis(axis) * plane.normal.axis(axis) < 0.0
}
