use crate::model::geometry::Geometry;
use crate::prelude::{DetectorError, DetectorResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Detector description: name, thickness in micrometres and an owned geometry.
///
/// Cloning a detector deep-copies its geometry, so a clone can be mutated
/// without touching the detector it came from. The default value carries no
/// geometry and only serves as an empty target before a geometry is attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detector {
    pub name: String,
    #[serde(serialize_with = "crate::archive::finite_f32")]
    pub thickness: f32,
    geometry: Option<Box<Geometry>>,
}

impl Detector {
    /// Builds a detector holding its own copy of `geometry`.
    pub fn new(name: impl Into<String>, thickness: f32, geometry: &Geometry) -> Self {
        Self {
            name: name.into(),
            thickness,
            geometry: Some(Box::new(*geometry)),
        }
    }

    /// Like [`Detector::new`], but rejects a missing geometry.
    pub fn from_parts(
        name: impl Into<String>,
        thickness: f32,
        geometry: Option<&Geometry>,
    ) -> DetectorResult<Self> {
        let name = name.into();
        let geometry = geometry.ok_or_else(|| {
            DetectorError::InvalidArgument(format!("detector {name} requires a geometry"))
        })?;
        Ok(Self::new(name, thickness, geometry))
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_deref()
    }

    pub fn geometry_mut(&mut self) -> Option<&mut Geometry> {
        self.geometry.as_deref_mut()
    }

    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }

    /// Returns the owned geometry, attaching a zeroed one first if none exists.
    pub(crate) fn geometry_or_default(&mut self) -> &mut Geometry {
        self.geometry.get_or_insert_with(Box::default)
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}, thickness: {} (um), geometry: ", self.name, self.thickness)?;
        match self.geometry() {
            Some(geometry) => write!(f, "{geometry}"),
            None => f.write_str("none"),
        }
    }
}
