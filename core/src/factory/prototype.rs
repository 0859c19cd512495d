use crate::factory::kind::DetectorKind;
use crate::model::{Detector, Geometry};
use crate::telemetry::log::LogManager;

/// Produces detectors by cloning canonical prototypes.
///
/// The prototypes are built once when the factory is constructed and are only
/// ever read through a clone, so a shared `&DetectorFactory` can be used from
/// several threads without locking.
pub struct DetectorFactory {
    sssd: Detector,
    dssd: Detector,
    logger: LogManager,
}

impl DetectorFactory {
    pub fn new() -> Self {
        let placeholder = Geometry::default();
        let prototype =
            |kind: DetectorKind| Detector::new(kind.name(), kind.thickness(), &placeholder);
        Self {
            sssd: prototype(DetectorKind::Sssd),
            dssd: prototype(DetectorKind::Dssd),
            logger: LogManager::new(),
        }
    }

    pub fn new_sssd(&self, theta: f32, distance: f32) -> Detector {
        self.create(DetectorKind::Sssd, theta, distance)
    }

    pub fn new_dssd(&self, theta: f32, distance: f32) -> Detector {
        self.create(DetectorKind::Dssd, theta, distance)
    }

    pub fn create(&self, kind: DetectorKind, theta: f32, distance: f32) -> Detector {
        let prototype = match kind {
            DetectorKind::Sssd => &self.sssd,
            DetectorKind::Dssd => &self.dssd,
        };
        let detector = Self::new_detector(theta, distance, prototype);
        self.logger.trace_creation(&detector);
        detector
    }

    /// Deep-copies `prototype` and places the copy at `theta`/`distance`.
    pub fn new_detector(theta: f32, distance: f32, prototype: &Detector) -> Detector {
        let mut detector = prototype.clone();
        let geometry = detector.geometry_or_default();
        geometry.theta = theta;
        geometry.distance = distance;
        detector
    }
}

impl Default for DetectorFactory {
    fn default() -> Self {
        Self::new()
    }
}
