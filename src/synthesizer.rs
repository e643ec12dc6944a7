use crate::correlation::{CorrelationBuilder, PATH_DAMPING};
use crate::dataset::GeneratedDataset;
use crate::discretizer::{ITEM_NOISE_SD, ItemDiscretizer};
use crate::error::{ConfigError, SynthesisError};
use crate::linalg::SquareMatrix;
use crate::model::ModelSpec;
use crate::rng::seeded_rng;
use crate::sampler::{LatentSampler, NonPsdPolicy};
use crate::summary::{ReportingMode, SummaryEngine, SummaryReport};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable constants of the generation pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub path_damping: f64,
    pub item_noise: f64,
    pub non_psd_policy: NonPsdPolicy,
    pub reporting_mode: ReportingMode,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            path_damping: PATH_DAMPING,
            item_noise: ITEM_NOISE_SD,
            non_psd_policy: NonPsdPolicy::Reject,
            reporting_mode: ReportingMode::Simulated,
        }
    }
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path_damping.is_finite() || !(0.0..=1.0).contains(&self.path_damping) {
            return Err(ConfigError::InvalidSetting {
                name: "path_damping",
                value: self.path_damping,
            });
        }
        if !self.item_noise.is_finite() || self.item_noise < 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "item_noise",
                value: self.item_noise,
            });
        }
        Ok(())
    }
}

/// Everything one run produces. Owned by the caller; nothing is retained by the synthesizer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub spec: ModelSpec,
    pub settings: GenerationSettings,
    /// The construct correlation matrix the latent scores were drawn from.
    pub correlation: SquareMatrix,
    pub dataset: GeneratedDataset,
    pub report: SummaryReport,
}

/// Runs the full pipeline for one `ModelSpec`:
/// correlation → latent sampling → item discretisation → summary tables.
pub struct Synthesizer {
    spec: ModelSpec,
    settings: GenerationSettings,
}

pub struct SynthesizerBuilder {
    spec: ModelSpec,
    settings: GenerationSettings,
}

impl SynthesizerBuilder {
    pub fn new(spec: ModelSpec) -> Self {
        Self {
            spec,
            settings: GenerationSettings::default(),
        }
    }
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }
    pub fn with_path_damping(mut self, damping: f64) -> Self {
        self.settings.path_damping = damping;
        self
    }
    pub fn with_item_noise(mut self, noise_sd: f64) -> Self {
        self.settings.item_noise = noise_sd;
        self
    }
    pub fn with_non_psd_policy(mut self, policy: NonPsdPolicy) -> Self {
        self.settings.non_psd_policy = policy;
        self
    }
    pub fn with_reporting_mode(mut self, mode: ReportingMode) -> Self {
        self.settings.reporting_mode = mode;
        self
    }
    pub fn build(self) -> Synthesizer {
        Synthesizer {
            spec: self.spec,
            settings: self.settings,
        }
    }
}

impl Synthesizer {
    pub fn builder(spec: ModelSpec) -> SynthesizerBuilder {
        SynthesizerBuilder::new(spec)
    }

    pub fn new(spec: ModelSpec) -> Self {
        SynthesizerBuilder::new(spec).build()
    }

    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Validates the model and runs the pipeline with a generator seeded from `spec.seed`.
    ///
    /// The same spec, settings and seed always produce an identical output.
    pub fn synthesize(&self) -> Result<GenerationOutput, SynthesisError> {
        let mut rng = seeded_rng(self.spec.seed);
        self.synthesize_with(&mut rng)
    }

    /// Runs the pipeline drawing from a caller-supplied generator.
    ///
    /// Validation happens before the first draw, so a rejected model leaves `rng` untouched.
    pub fn synthesize_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GenerationOutput, SynthesisError> {
        self.spec.validate()?;
        self.settings.validate()?;

        log::info!(
            "Generating {} responses for {} construct(s), {} item column(s), seed {}",
            self.spec.sample_size,
            self.spec.constructs.len(),
            self.spec.total_items(),
            self.spec.seed
        );

        // --- 1. Correlation structure ---
        let correlation = CorrelationBuilder::new(&self.spec)
            .with_damping(self.settings.path_damping)
            .build_with_report();

        // --- 2. Latent scores ---
        let latent = LatentSampler::new(&self.spec)
            .with_policy(self.settings.non_psd_policy)
            .sample(&correlation.matrix, rng)?;

        // --- 3. Likert items ---
        let dataset = ItemDiscretizer::new(&self.spec)
            .with_noise(self.settings.item_noise)
            .discretize(&latent.scores, rng);
        log::debug!(
            "-> Discretised {} rows × {} columns",
            dataset.len(),
            dataset.column_count()
        );

        // --- 4. Summary tables ---
        let mut report = SummaryEngine::new(&self.spec)
            .with_mode(self.settings.reporting_mode)
            .summarize(&dataset, rng);

        for label in &correlation.skipped_paths {
            report.notes.push(format!(
                "Path '{}' references an unknown construct and did not shape the correlation structure",
                label
            ));
        }
        if latent.repaired {
            report.notes.push(
                "The configured paths produced an invalid covariance matrix; the nearest valid correlation matrix was used instead"
                    .to_string(),
            );
        }
        report.notes.extend(self.inert_effect_notes());

        log::info!(
            "Generation finished: {} rows, {} descriptive row(s), {} path row(s)",
            dataset.len(),
            report.descriptive.len(),
            report.paths.len()
        );

        Ok(GenerationOutput {
            spec: self.spec.clone(),
            settings: self.settings,
            correlation: latent.correlation,
            dataset,
            report,
        })
    }

    /// Moderations and mediations are recorded but never applied; say so in the report.
    fn inert_effect_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if !self.spec.moderations.is_empty() {
            notes.push(format!(
                "{} moderation effect(s) recorded but not applied to the generated data",
                self.spec.moderations.len()
            ));
        }
        if !self.spec.mediations.is_empty() {
            notes.push(format!(
                "{} mediation effect(s) recorded but not applied to the generated data",
                self.spec.mediations.len()
            ));
        }
        for dangling in self.spec.dangling_effect_references() {
            log::warn!("{}", dangling);
            notes.push(dangling);
        }
        notes
    }
}
