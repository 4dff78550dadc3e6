pub mod barycentric;
pub mod distance_3d;
pub mod vector;

use std::fmt;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D vector known to have unit length.
pub type UnitVector3 = nalgebra::Unit<Vector3>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum barycentric weight for a point to count as strictly inside a triangle.
pub const EPSILON: f64 = 1e-4;

/// Tolerances used by classification queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Minimum barycentric weight accepted by the triangle interior test.
    pub interior: f64,
    /// Largest `|cos|` of the angle between two vectors still classified
    /// as perpendicular.
    pub perpendicular: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            interior: EPSILON,
            perpendicular: TOLERANCE,
        }
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis into a vector's components.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
