use crate::scenario::config::{CloneSpec, ScenarioConfig};
use anyhow::Context;
use detcore::archive::{clone_via_archive, ArchivedClone};
use detcore::telemetry::LogManager;
use detcore::{Detector, DetectorFactory};
use log::debug;

pub struct CloneOutcome {
    pub source: Detector,
    pub archive: String,
    pub clone: Detector,
}

pub struct ScenarioResult {
    pub created: Vec<Detector>,
    pub clones: Vec<CloneOutcome>,
}

pub struct Runner {
    config: ScenarioConfig,
    factory: DetectorFactory,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            factory: DetectorFactory::new(),
            logger: LogManager::new(),
        }
    }

    pub fn execute(&self) -> anyhow::Result<ScenarioResult> {
        let created = self
            .config
            .detectors
            .iter()
            .map(|spec| self.factory.create(spec.kind, spec.theta, spec.distance))
            .collect::<Vec<_>>();

        let clones = self
            .config
            .clones
            .iter()
            .map(|spec| self.run_clone(spec))
            .collect::<anyhow::Result<Vec<_>>>()?;

        self.logger.record(&format!(
            "scenario produced {} detectors and {} clones",
            created.len(),
            clones.len()
        ));

        Ok(ScenarioResult { created, clones })
    }

    fn run_clone(&self, spec: &CloneSpec) -> anyhow::Result<CloneOutcome> {
        let mut source = self.factory.create(spec.kind, spec.theta, spec.distance);
        source.name = spec.source_name.clone();
        debug!("cloning {} through the archive", source.name);

        let ArchivedClone {
            text: archive,
            value: mut clone,
        } = clone_via_archive(&source)
            .with_context(|| format!("cloning {} through the archive", source.name))?;

        clone.name = spec.clone_name.clone();
        clone.thickness = spec.clone_thickness;
        if let Some(distance) = spec.clone_distance {
            let clone_name = clone.name.clone();
            let geometry = clone
                .geometry_mut()
                .with_context(|| format!("clone {} has no geometry", clone_name))?;
            geometry.distance = distance;
        }

        debug!("archive clone {} ready: {}", clone.name, clone);
        Ok(CloneOutcome {
            source,
            archive,
            clone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detcore::Geometry;

    #[test]
    fn runner_executes_default_scenario() {
        let result = Runner::new(ScenarioConfig::default()).execute().unwrap();
        assert_eq!(
            result.created[0].to_string(),
            "name: SSSD, thickness: 50 (um), geometry: theta: 63.4 distance: 13.5"
        );
        assert_eq!(result.created[1].name, "DSSD");
        assert_eq!(result.clones.len(), 2);
    }

    #[test]
    fn clones_leave_their_sources_unchanged() {
        let result = Runner::new(ScenarioConfig::default()).execute().unwrap();

        let sssd = &result.clones[0];
        assert_eq!(sssd.source.name, "SSSD2");
        assert_eq!(sssd.source.thickness, 50.0);
        assert_eq!(sssd.clone.name, "SSSD3");
        assert_eq!(sssd.clone.thickness, 25.0);
        assert_eq!(sssd.clone.geometry(), Some(&Geometry::new(13.1, 23.2)));

        let dssd = &result.clones[1];
        assert_eq!(dssd.source.thickness, 1000.0);
        assert_eq!(dssd.source.geometry(), Some(&Geometry::new(13.1, 26.2)));
        assert_eq!(dssd.clone.thickness, 1050.0);
        assert_eq!(dssd.clone.geometry(), Some(&Geometry::new(13.1, 28.2)));
        assert!(dssd.archive.contains("DSSD2"));
    }

    #[test]
    fn empty_scenario_produces_nothing() {
        let config = ScenarioConfig {
            detectors: Vec::new(),
            clones: Vec::new(),
        };
        let result = Runner::new(config).execute().unwrap();
        assert!(result.created.is_empty());
        assert!(result.clones.is_empty());
    }
}
