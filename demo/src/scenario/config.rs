use anyhow::Context;
use detcore::DetectorKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A detector produced straight from the factory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DetectorSpec {
    pub kind: DetectorKind,
    pub theta: f32,
    pub distance: f32,
}

/// A detector produced, renamed, then cloned through the text archive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CloneSpec {
    pub kind: DetectorKind,
    pub theta: f32,
    pub distance: f32,
    pub source_name: String,
    pub clone_name: String,
    pub clone_thickness: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_distance: Option<f32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub detectors: Vec<DetectorSpec>,
    #[serde(default)]
    pub clones: Vec<CloneSpec>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            detectors: vec![
                DetectorSpec {
                    kind: DetectorKind::Sssd,
                    theta: 63.4,
                    distance: 13.5,
                },
                DetectorSpec {
                    kind: DetectorKind::Dssd,
                    theta: 63.4,
                    distance: 16.0,
                },
            ],
            clones: vec![
                CloneSpec {
                    kind: DetectorKind::Sssd,
                    theta: 13.1,
                    distance: 23.2,
                    source_name: "SSSD2".into(),
                    clone_name: "SSSD3".into(),
                    clone_thickness: 25.0,
                    clone_distance: None,
                },
                CloneSpec {
                    kind: DetectorKind::Dssd,
                    theta: 13.1,
                    distance: 26.2,
                    source_name: "DSSD2".into(),
                    clone_name: "DSSD3".into(),
                    clone_thickness: 1050.0,
                    clone_distance: Some(28.2),
                },
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_scenario_mirrors_legacy_run() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.detectors.len(), 2);
        assert_eq!(cfg.clones[0].clone_name, "SSSD3");
        assert_eq!(cfg.clones[1].clone_distance, Some(28.2));
    }

    #[test]
    fn scenario_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"detectors:\n  - kind: dssd\n    theta: 10.0\n    distance: 2.5\n\
clones:\n  - kind: sssd\n    theta: 1.0\n    distance: 2.0\n    source_name: A\n    clone_name: B\n    clone_thickness: 30.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ScenarioConfig::load(&path).unwrap();
        assert_eq!(cfg.detectors[0].kind, DetectorKind::Dssd);
        assert_eq!(cfg.clones[0].clone_distance, None);
    }

    #[test]
    fn scenario_load_leaves_missing_sections_empty() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"detectors:\n  - kind: sssd\n    theta: 1.0\n    distance: 1.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ScenarioConfig::load(&path).unwrap();
        assert_eq!(cfg.detectors.len(), 1);
        assert!(cfg.clones.is_empty());
    }

    #[test]
    fn scenario_load_rejects_unknown_kind() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"detectors:\n  - kind: tssd\n    theta: 1.0\n    distance: 1.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        assert!(ScenarioConfig::load(&path).is_err());
    }
}
