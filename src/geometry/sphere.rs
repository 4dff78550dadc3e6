use tracing::warn;

use crate::error::{Result, SphereError};
use crate::math::{Axis, Point3, TOLERANCE};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

/// The two surface points sharing the given coordinates.
///
/// `positive` lies on the increasing side of the solved axis, `negative` on
/// the decreasing side. They coincide where the axis line is tangent to the
/// sphere, or when the full point was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoints {
    /// Solution with `+sqrt` added to the center coordinate.
    pub positive: Point3,
    /// Solution with `-sqrt` added to the center coordinate.
    pub negative: Point3,
}

impl SurfacePoints {
    /// Both solutions, positive root first.
    #[must_use]
    pub fn points(&self) -> [Point3; 2] {
        [self.positive, self.negative]
    }
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SphereError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Completes a surface point from two of its three coordinates.
    ///
    /// Solves `(x - cx)^2 + (y - cy)^2 + (z - cz)^2 = r^2` for the missing
    /// coordinate and returns both roots. A discriminant that is negative
    /// only by rounding noise is treated as a tangent.
    ///
    /// When all three coordinates are given the point is checked against
    /// the surface and returned as both roots.
    ///
    /// # Errors
    ///
    /// - [`SphereError::InsufficientCoordinates`] if fewer than two are given.
    /// - [`SphereError::NoRealSolution`] if no surface point has the given
    ///   coordinates.
    /// - [`SphereError::NotOnSurface`] if all three are given and the point
    ///   is off the surface.
    pub fn solve_missing_coordinate(
        &self,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) -> Result<SurfacePoints> {
        let missing = match (x, y, z) {
            (Some(x), Some(y), Some(z)) => return self.check_surface_point(Point3::new(x, y, z)),
            (Some(_), Some(_), None) => Axis::Z,
            (Some(_), None, Some(_)) => Axis::Y,
            (None, Some(_), Some(_)) => Axis::X,
            _ => {
                let provided = [x, y, z].iter().flatten().count();
                warn!(provided, "at least two coordinates must be provided");
                return Err(SphereError::InsufficientCoordinates { provided }.into());
            }
        };

        let mut point = self.center;
        let mut known_sq = 0.0;
        for (i, value) in [x, y, z].into_iter().enumerate() {
            if let Some(value) = value {
                point[i] = value;
                known_sq += (value - self.center[i]).powi(2);
            }
        }

        let r2 = self.radius * self.radius;
        let discriminant = r2 - known_sq;
        if discriminant < -TOLERANCE * r2.max(1.0) {
            warn!(axis = %missing, discriminant, "cannot solve sphere coordinate");
            return Err(SphereError::NoRealSolution {
                axis: missing,
                discriminant,
            }
            .into());
        }

        let root = discriminant.max(0.0).sqrt();
        let i = missing.index();
        let mut positive = point;
        positive[i] = self.center[i] + root;
        let mut negative = point;
        negative[i] = self.center[i] - root;

        Ok(SurfacePoints { positive, negative })
    }

    fn check_surface_point(&self, point: Point3) -> Result<SurfacePoints> {
        let r2 = self.radius * self.radius;
        let residual = ((point - self.center).norm_squared() - r2).abs();
        if residual > TOLERANCE * r2.max(1.0) {
            warn!(residual, "all coordinates provided but point is off the sphere");
            return Err(SphereError::NotOnSurface { residual }.into());
        }
        Ok(SurfacePoints {
            positive: point,
            negative: point,
        })
    }
}
