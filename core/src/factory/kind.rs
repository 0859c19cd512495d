use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical detector prototypes known to the factory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Single-sided silicon strip detector.
    Sssd,
    /// Double-sided silicon strip detector.
    Dssd,
}

impl DetectorKind {
    pub fn name(self) -> &'static str {
        match self {
            DetectorKind::Sssd => "SSSD",
            DetectorKind::Dssd => "DSSD",
        }
    }

    /// Prototype thickness in micrometres.
    pub fn thickness(self) -> f32 {
        match self {
            DetectorKind::Sssd => 50.0,
            DetectorKind::Dssd => 1000.0,
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
