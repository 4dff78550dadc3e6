use thiserror::Error;

use crate::math::Axis;

/// Top-level error type for geomkit.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sphere(#[from] SphereError),
}

/// Errors related to degenerate geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while solving points on a sphere surface.
#[derive(Debug, Error, PartialEq)]
pub enum SphereError {
    #[error("sphere radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("at least two coordinates are required, got {provided}")]
    InsufficientCoordinates { provided: usize },

    #[error("cannot solve {axis}: negative value under square root ({discriminant})")]
    NoRealSolution { axis: Axis, discriminant: f64 },

    #[error("point is not on the sphere surface (off by {residual})")]
    NotOnSurface { residual: f64 },
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
