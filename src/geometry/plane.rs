use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::vector::unit_cross;
use crate::math::{Point3, UnitVector3, Vector3, TOLERANCE};

use super::Line;

/// An infinite plane in 3D space.
///
/// Stored in implicit form `normal · p + d = 0` with a unit-length normal,
/// so `d` is the negated distance from the origin along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: UnitVector3,
    d: f64,
}

impl Plane {
    /// Creates a plane directly from its unit normal and offset.
    #[must_use]
    pub fn new(normal: UnitVector3, d: f64) -> Self {
        Self { normal, d }
    }

    /// Creates the plane through `point` with the given normal.
    ///
    /// The normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_point_normal(point: Point3, normal: Vector3) -> Result<Self> {
        let normal = UnitVector3::try_new(normal, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        Ok(Self::through_point(&point, normal))
    }

    /// Creates the plane through three points.
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`, so counter-clockwise points
    /// face the viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let normal = unit_cross(&(p2 - p1), &(p3 - p1))
            .ok_or_else(|| GeometryError::Degenerate("plane points are collinear".into()))?;
        Ok(Self::through_point(&p1, normal))
    }

    /// Creates the plane containing two intersecting lines.
    ///
    /// The normal is `dir1 x dir2` and the plane passes through the first
    /// line's point.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines are parallel or skew.
    pub fn from_lines(first: &Line, second: &Line) -> Result<Self> {
        let normal = unit_cross(first.direction(), second.direction())
            .ok_or_else(|| GeometryError::Degenerate("plane lines are parallel".into()))?;

        let offset = second.point() - first.point();
        if normal.dot(&offset).abs() > TOLERANCE * offset.norm() {
            return Err(GeometryError::Degenerate("plane lines do not intersect".into()).into());
        }

        Ok(Self::through_point(first.point(), normal))
    }

    /// Creates the plane containing `line` and a point not on it.
    ///
    /// The normal is `direction x (point - line.point)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the point lies on the line.
    pub fn from_line_and_point(line: &Line, point: Point3) -> Result<Self> {
        let to_point = point - line.point();
        let normal = unit_cross(line.direction(), &to_point)
            .ok_or_else(|| GeometryError::Degenerate("plane point lies on the line".into()))?;
        Ok(Self::through_point(line.point(), normal))
    }

    fn through_point(point: &Point3, normal: UnitVector3) -> Self {
        let d = -normal.dot(&point.coords);
        Self { normal, d }
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &UnitVector3 {
        &self.normal
    }

    /// Returns the offset `d` of the plane equation.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Returns some point satisfying the plane equation.
    ///
    /// Two coordinates are fixed to `1.0` and the third is solved with the
    /// largest-priority non-zero normal component, in the order z, y, x.
    #[must_use]
    pub fn point_on_plane(&self) -> Point3 {
        let (a, b, c) = (self.normal.x, self.normal.y, self.normal.z);
        let d = self.d;

        if c.abs() > TOLERANCE {
            Point3::new(1.0, 1.0, -(a + b + d) / c)
        } else if b.abs() > TOLERANCE {
            Point3::new(1.0, -(a + c + d) / b, 1.0)
        } else {
            // Unit normal: with b and c near zero, a is near +-1.
            Point3::new(-(b + c + d) / a, 1.0, 1.0)
        }
    }

    /// Signed distance from `point` to the plane, positive on the side the
    /// normal points to.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.d
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x + {}y + {}z + {} = 0",
            self.normal.x, self.normal.y, self.normal.z, self.d
        )
    }
}
