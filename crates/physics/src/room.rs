//! # Room Geometry
//!
//! The closed rectangular room the spheres bounce around in. It is built once
//! from an axis-aligned box and never changes afterwards.

use crate::error::PhysicsError;
use crate::types::{Axis, Plane, Vec3};

/// The six named walls of the room
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Floor,
    Ceiling,
    Back,
    Left,
    Right,
    Front,
}

impl Wall {
    pub const ALL: [Wall; 6] = [
        Wall::Floor,
        Wall::Ceiling,
        Wall::Back,
        Wall::Left,
        Wall::Right,
        Wall::Front,
    ];

    /// Walls grouped by axis, in bounce evaluation order. Within a pair the
    /// first wall wins when a sphere touches both in the same frame.
    pub const AXIS_PAIRS: [(Wall, Wall); 3] = [
        (Wall::Left, Wall::Right),
        (Wall::Floor, Wall::Ceiling),
        (Wall::Back, Wall::Front),
    ];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Wall::Left | Wall::Right => Axis::X,
            Wall::Floor | Wall::Ceiling => Axis::Y,
            Wall::Back | Wall::Front => Axis::Z,
        }
    }

    /// Whether the wall sits at the low end of its axis
    #[must_use]
    pub const fn is_lower(self) -> bool {
        matches!(self, Wall::Left | Wall::Floor | Wall::Back)
    }

    const fn index(self) -> usize {
        match self {
            Wall::Floor => 0,
            Wall::Ceiling => 1,
            Wall::Back => 2,
            Wall::Left => 3,
            Wall::Right => 4,
            Wall::Front => 5,
        }
    }
}

/// Six inward-facing planes bounding a convex box
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    planes: [Plane; 6],
    min: Vec3,
    max: Vec3,
}

impl Room {
    /// Build the room enclosing the box `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::DegenerateRoom`] if any extent is empty or not
    /// finite.
    pub fn from_bounds(min: Vec3, max: Vec3) -> Result<Self, PhysicsError> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (lo, hi) = (min.axis(axis), max.axis(axis));
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(PhysicsError::DegenerateRoom { axis, min: lo, max: hi });
            }
        }

        let planes = Wall::ALL.map(|wall| {
            let axis = wall.axis();
            let unit = Vec3::unit(axis);
            if wall.is_lower() {
                Plane::new(unit, min.axis(axis))
            } else {
                Plane::new(-unit, -max.axis(axis))
            }
        });

        Ok(Self { planes, min, max })
    }

    /// The classic Cornell box dimensions
    #[must_use]
    pub fn cornell_box() -> Self {
        Self {
            planes: [
                Plane::new(Vec3::Y, 0.0),
                Plane::new(-Vec3::Y, -548.8),
                Plane::new(Vec3::Z, -559.2),
                Plane::new(Vec3::X, 0.0),
                Plane::new(-Vec3::X, -556.0),
                Plane::new(-Vec3::Z, 0.0),
            ],
            min: Vec3::new(0.0, 0.0, -559.2),
            max: Vec3::new(556.0, 548.8, 0.0),
        }
    }

    #[must_use]
    pub const fn plane(&self, wall: Wall) -> &Plane {
        &self.planes[wall.index()]
    }

    /// All walls with their planes, in construction order
    pub fn walls(&self) -> impl Iterator<Item = (Wall, &Plane)> {
        Wall::ALL.into_iter().map(move |wall| (wall, self.plane(wall)))
    }

    #[must_use]
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Whether `point` lies on the interior side of every wall
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        self.planes.iter().all(|p| p.signed_distance(point) >= 0.0)
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::cornell_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cornell_box_matches_bounds_construction() {
        let built = Room::from_bounds(Vec3::new(0.0, 0.0, -559.2), Vec3::new(556.0, 548.8, 0.0))
            .unwrap();
        assert_eq!(built, Room::cornell_box());
    }

    #[test]
    fn walls_face_inward() {
        let room = Room::from_bounds(Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();
        for (wall, plane) in room.walls() {
            assert!(
                (plane.signed_distance(Vec3::ZERO) - 1.0).abs() < 1e-6,
                "{wall:?} does not face the center"
            );
        }
        assert!(room.contains(Vec3::ZERO));
        assert!(!room.contains(Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn empty_extent_is_rejected() {
        let err = Room::from_bounds(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, PhysicsError::DegenerateRoom { axis: Axis::Y, .. }));
    }
}
