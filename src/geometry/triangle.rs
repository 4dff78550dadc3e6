use crate::error::Result;
use crate::math::barycentric::{
    barycentric_coordinates, point_in_triangle_interior, triangle_area_from_points, Barycentric,
};
use crate::math::vector::surface_normal;
use crate::math::{Point3, UnitVector3};

/// A triangle with vertices wound counter-clockwise.
///
/// Collinear vertices are accepted; queries that divide by the area report
/// the degeneracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3,
    /// Second vertex.
    pub b: Point3,
    /// Third vertex.
    pub c: Point3,
}

impl Triangle {
    /// Creates a new triangle from three vertices.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    /// Area of the triangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        triangle_area_from_points(&self.a, &self.b, &self.c)
    }

    /// Unit normal following the counter-clockwise winding.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle is degenerate.
    pub fn normal(&self) -> Result<UnitVector3> {
        surface_normal(&(self.b - self.a), &(self.c - self.a))
    }

    /// Barycentric coordinates of `point` relative to this triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle is degenerate.
    pub fn barycentric(&self, point: &Point3) -> Result<Barycentric> {
        barycentric_coordinates(point, self)
    }

    /// Whether `point` lies strictly inside the triangle.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        point_in_triangle_interior(point, self)
    }
}
