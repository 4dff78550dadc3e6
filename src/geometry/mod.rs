mod line;
mod plane;
mod sphere;
mod triangle;

pub use line::Line;
pub use plane::Plane;
pub use sphere::{Sphere, SurfacePoints};
pub use triangle::Triangle;
