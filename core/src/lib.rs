//! Detector model and prototype-based factory.
//!
//! Detectors are produced by cloning canonical prototypes and customizing the
//! copy's geometry. The text archive round-trips any model value and doubles
//! as a second cloning route.

pub mod archive;
pub mod factory;
pub mod model;
pub mod prelude;
pub mod telemetry;

pub use factory::{DetectorFactory, DetectorKind};
pub use model::{Detector, Geometry};
pub use prelude::{DetectorError, DetectorResult};
