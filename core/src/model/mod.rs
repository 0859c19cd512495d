pub mod detector;
pub mod geometry;

pub use detector::Detector;
pub use geometry::Geometry;
