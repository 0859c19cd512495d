use log::{debug, info};

use crate::model::Detector;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn trace_creation(&self, detector: &Detector) {
        debug!("produced detector {}", detector);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
