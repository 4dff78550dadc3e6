pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeomError, Result};
