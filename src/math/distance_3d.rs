use crate::geometry::{Line, Plane};

use super::vector::projection;
use super::{Point3, Vector3};

/// Shortest offset between a point and an infinite line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLineRelation {
    /// Perpendicular distance from the point to the line.
    pub distance: f64,
    /// Perpendicular vector from the point to its foot on the line.
    pub perpendicular: Vector3,
}

/// Computes the perpendicular offset from `point` to `line`.
///
/// The vector from the point to the line's reference point is split into a
/// component along the line direction and a perpendicular remainder; the
/// remainder and its length are returned.
#[must_use]
pub fn point_line_relation(point: &Point3, line: &Line) -> PointLineRelation {
    let b = line.point() - point;
    let along = projection(line.direction(), &b);
    let perpendicular = b - along;
    PointLineRelation {
        distance: perpendicular.norm(),
        perpendicular,
    }
}

/// Unsigned distance from `point` to `plane`.
///
/// Measured along the plane normal from an arbitrary point on the plane.
#[must_use]
pub fn distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    let on_plane = plane.point_on_plane();
    plane.normal().dot(&(point - on_plane)).abs()
}
