use crate::error::{GeometryError, Result};
use crate::math::distance_3d::{point_line_relation, PointLineRelation};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite line defined by a point on it and a direction vector.
///
/// The parametric form is: `P(t) = point + t * direction`.
/// The direction keeps the length it was created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line through `point` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(point: Point3, direction: Vector3) -> Result<Self> {
        if direction.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { point, direction })
    }

    /// Creates the line through two distinct points, directed from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn through(from: Point3, to: Point3) -> Result<Self> {
        Self::new(from, to - from)
    }

    /// Returns the reference point of the line.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3 {
        self.point + self.direction * t
    }

    /// Shortest offset from `point` to this line.
    #[must_use]
    pub fn relation_to(&self, point: &Point3) -> PointLineRelation {
        point_line_relation(point, self)
    }
}
