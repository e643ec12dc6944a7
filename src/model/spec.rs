use super::construct::{Construct, MAX_ITEMS, MEAN_RANGE, MIN_ITEMS, Role, SD_RANGE};
use super::relation::{Mediation, Moderation, Path};
use crate::error::ConfigError;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::fs;

/// Fewest respondents a run may generate.
pub const MIN_SAMPLE_SIZE: usize = 50;
/// Most respondents a run may generate.
pub const MAX_SAMPLE_SIZE: usize = 10_000;

/// The complete, immutable description of one generation run.
///
/// The order of `constructs` fixes the row/column index of every construct in all
/// downstream matrices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub constructs: Vec<Construct>,
    #[serde(default)]
    pub paths: Vec<Path>,
    #[serde(default)]
    pub moderations: Vec<Moderation>,
    #[serde(default)]
    pub mediations: Vec<Mediation>,
    pub sample_size: usize,
    pub seed: u64,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            constructs: vec![
                Construct::new("PE", 4, 3.45, 0.42, Role::IV),
                Construct::new("ATT", 4, 3.2, 0.45, Role::DV),
            ],
            paths: Vec::new(),
            moderations: Vec::new(),
            mediations: Vec::new(),
            sample_size: 926,
            seed: 2025,
        }
    }
}

impl ModelSpec {
    pub fn new(constructs: Vec<Construct>, sample_size: usize, seed: u64) -> Self {
        Self {
            constructs,
            paths: Vec::new(),
            moderations: Vec::new(),
            mediations: Vec::new(),
            sample_size,
            seed,
        }
    }

    pub fn with_path(mut self, path: Path) -> Self {
        self.paths.push(path);
        self
    }

    pub fn with_moderation(mut self, moderation: Moderation) -> Self {
        self.moderations.push(moderation);
        self
    }

    pub fn with_mediation(mut self, mediation: Mediation) -> Self {
        self.mediations.push(mediation);
        self
    }

    /// Parses a model from its JSON representation. The result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Loads a model from a JSON file. The result is not yet validated.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Checks every construct, path and run parameter, returning the first violation.
    ///
    /// Paths with unknown endpoints are accepted here; the correlation builder skips them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.constructs.is_empty() {
            return Err(ConfigError::NoConstructs);
        }

        let mut seen = AHashSet::new();
        for (index, construct) in self.constructs.iter().enumerate() {
            if construct.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !seen.insert(construct.name.as_str()) {
                return Err(ConfigError::DuplicateConstruct(construct.name.clone()));
            }
            Self::validate_construct(construct)?;
        }

        if !(MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE).contains(&self.sample_size) {
            return Err(ConfigError::SampleSizeOutOfRange {
                size: self.sample_size,
                min: MIN_SAMPLE_SIZE,
                max: MAX_SAMPLE_SIZE,
            });
        }

        for path in &self.paths {
            if path.from == path.to {
                return Err(ConfigError::SelfLoop(path.from.clone()));
            }
            if !path.coefficient.is_finite() {
                return Err(ConfigError::NonFinite {
                    owner: path.label(),
                    field: "coefficient",
                });
            }
            if !(-1.0..=1.0).contains(&path.coefficient) {
                return Err(ConfigError::CoefficientOutOfRange {
                    from: path.from.clone(),
                    to: path.to.clone(),
                    coefficient: path.coefficient,
                });
            }
        }

        Ok(())
    }

    fn validate_construct(construct: &Construct) -> Result<(), ConfigError> {
        if !(MIN_ITEMS..=MAX_ITEMS).contains(&construct.items) {
            return Err(ConfigError::ItemsOutOfRange {
                name: construct.name.clone(),
                items: construct.items,
                min: MIN_ITEMS,
                max: MAX_ITEMS,
            });
        }
        for (field, value) in [("mean", construct.mean), ("sd", construct.sd)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    owner: construct.name.clone(),
                    field,
                });
            }
        }
        if construct.mean < MEAN_RANGE.0 || construct.mean > MEAN_RANGE.1 {
            return Err(ConfigError::MeanOutOfRange {
                name: construct.name.clone(),
                mean: construct.mean,
                min: MEAN_RANGE.0,
                max: MEAN_RANGE.1,
            });
        }
        if construct.sd < SD_RANGE.0 || construct.sd > SD_RANGE.1 {
            return Err(ConfigError::SdOutOfRange {
                name: construct.name.clone(),
                sd: construct.sd,
                min: SD_RANGE.0,
                max: SD_RANGE.1,
            });
        }
        Ok(())
    }

    /// Maps each construct name to its matrix index.
    pub fn construct_index(&self) -> AHashMap<&str, usize> {
        self.constructs
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.as_str(), i))
            .collect()
    }

    pub fn construct_names(&self) -> Vec<&str> {
        self.constructs.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn total_items(&self) -> usize {
        self.constructs.iter().map(|c| c.items as usize).sum()
    }

    /// Describes every moderation/mediation reference that names an unknown construct.
    pub fn dangling_effect_references(&self) -> Vec<String> {
        let index = self.construct_index();
        let mut dangling = Vec::new();

        for moderation in &self.moderations {
            for name in [&moderation.moderator, &moderation.iv, &moderation.dv] {
                if !index.contains_key(name.as_str()) {
                    dangling.push(format!(
                        "moderation '{}' names unknown construct '{}'",
                        moderation, name
                    ));
                }
            }
        }
        for mediation in &self.mediations {
            for name in [&mediation.mediator, &mediation.iv, &mediation.dv] {
                if !index.contains_key(name.as_str()) {
                    dangling.push(format!(
                        "mediation '{}' names unknown construct '{}'",
                        mediation, name
                    ));
                }
            }
        }

        dangling
    }
}
