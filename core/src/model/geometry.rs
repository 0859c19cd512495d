use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement of a detector: its theta angle and distance from the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(serialize_with = "crate::archive::finite_f32")]
    pub theta: f32,
    #[serde(serialize_with = "crate::archive::finite_f32")]
    pub distance: f32,
}

impl Geometry {
    pub const fn new(theta: f32, distance: f32) -> Self {
        Self { theta, distance }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theta: {} distance: {}", self.theta, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_display_lists_theta_then_distance() {
        let geometry = Geometry::new(63.4, 13.5);
        assert_eq!(geometry.to_string(), "theta: 63.4 distance: 13.5");
    }

    #[test]
    fn geometry_default_is_zeroed() {
        assert_eq!(Geometry::default(), Geometry::new(0.0, 0.0));
    }
}
