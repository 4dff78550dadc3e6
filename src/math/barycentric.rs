use tracing::warn;

use crate::error::{GeometryError, Result};
use crate::geometry::Triangle;

use super::{Point3, Tolerances, Vector3, TOLERANCE};

/// Barycentric weights of a point relative to a triangle's vertices.
///
/// `point = u * a + v * b + w * c` for a point in the triangle's plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    /// Weight of vertex `a`.
    pub u: f64,
    /// Weight of vertex `b`.
    pub v: f64,
    /// Weight of vertex `c`.
    pub w: f64,
}

impl Barycentric {
    /// Sum of the three weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.u + self.v + self.w
    }

    /// Whether every weight is at least `min`.
    #[must_use]
    pub fn all_at_least(&self, min: f64) -> bool {
        self.u >= min && self.v >= min && self.w >= min
    }
}

/// Area of the triangle spanned by two edge vectors: `|a x b| / 2`.
///
/// Order and sign of the edges do not matter.
#[must_use]
pub fn triangle_area_from_vectors(a: &Vector3, b: &Vector3) -> f64 {
    0.5 * a.cross(b).norm()
}

/// Area of the triangle with the given corners.
#[must_use]
pub fn triangle_area_from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    triangle_area_from_vectors(&(p1 - p2), &(p2 - p3))
}

/// Barycentric coordinates of `point` relative to `triangle`.
///
/// `u` and `v` are ratios of unsigned sub-triangle areas to the full area,
/// and `w = 1 - u - v`. Points outside the triangle therefore show up as a
/// negative `w` or as `u + v > 1`.
///
/// # Errors
///
/// Returns an error if the triangle area is at most [`TOLERANCE`] times the
/// squared length of its longest edge.
pub fn barycentric_coordinates(point: &Point3, triangle: &Triangle) -> Result<Barycentric> {
    let area = triangle.area();
    let longest_sq = longest_edge_squared(triangle);
    if area.is_nan() || area <= TOLERANCE * longest_sq {
        warn!(area, longest_sq, "barycentric coordinates of a degenerate triangle");
        return Err(GeometryError::Degenerate("triangle has zero area".into()).into());
    }

    let u = triangle_area_from_points(point, &triangle.b, &triangle.c) / area;
    let v = triangle_area_from_points(point, &triangle.a, &triangle.c) / area;
    Ok(Barycentric { u, v, w: 1.0 - u - v })
}

fn longest_edge_squared(triangle: &Triangle) -> f64 {
    let ab = (triangle.b - triangle.a).norm_squared();
    let bc = (triangle.c - triangle.b).norm_squared();
    let ca = (triangle.a - triangle.c).norm_squared();
    ab.max(bc).max(ca)
}

/// Strict interior test using the default [`Tolerances`].
///
/// Points on an edge or vertex are outside.
#[must_use]
pub fn point_in_triangle_interior(point: &Point3, triangle: &Triangle) -> bool {
    point_in_triangle_interior_with(point, triangle, &Tolerances::default())
}

/// Whether every barycentric weight of `point` is at least
/// `tolerances.interior`.
///
/// A degenerate triangle contains no points.
#[must_use]
pub fn point_in_triangle_interior_with(
    point: &Point3,
    triangle: &Triangle,
    tolerances: &Tolerances,
) -> bool {
    let Ok(coords) = barycentric_coordinates(point, triangle) else {
        return false;
    };
    coords.all_at_least(tolerances.interior)
}
