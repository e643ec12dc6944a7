//! Summary tables derived from a generated dataset.
//!
//! Descriptive moments are computed from the data. Reliability, average loadings, path
//! estimates and fit indices are **simulated**: they are drawn from fixed plausible bands
//! and do not come from any estimation on the generated items. [`ReportingMode`] tags
//! every report so a computed mode can be added alongside the simulated one.

use crate::dataset::GeneratedDataset;
use crate::model::ModelSpec;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod descriptive;
pub mod fit;
pub mod paths;

pub use descriptive::*;
pub use fit::*;
pub use paths::*;

/// Text attached to every simulated report.
pub const SIMULATED_CAVEAT: &str = "Reliability (Cronbach's α), average loadings, path estimates (β, t, p) and fit indices \
(SRMR, NFI, CFI) are simulated placeholders drawn from plausible ranges. They are not \
estimated from the generated data and must not be reported as analysis results.";

/// How the inferential parts of a report were produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ReportingMode {
    /// Illustrative values drawn from fixed bands with the run's seeded generator.
    #[default]
    Simulated,
}

/// A closed interval a simulated statistic is drawn from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Draws `low + u * (high - low)` with `u` uniform in `[0, 1)`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.low + rng.random::<f64>() * (self.high - self.low)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// The three summary tables of a run, plus the caveat and any run notes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub mode: ReportingMode,
    pub descriptive: Vec<DescriptiveRow>,
    pub paths: Vec<PathRow>,
    pub fit: FitIndices,
    pub caveat: String,
    pub notes: Vec<String>,
}

/// Builds a [`SummaryReport`] from a dataset and the model that produced it.
pub struct SummaryEngine<'a> {
    spec: &'a ModelSpec,
    mode: ReportingMode,
}

impl<'a> SummaryEngine<'a> {
    pub fn new(spec: &'a ModelSpec) -> Self {
        Self {
            spec,
            mode: ReportingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ReportingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Produces all tables. Random draws happen in a fixed order: per construct
    /// (reliability, loading), per path (beta, t), then SRMR, NFI and CFI.
    pub fn summarize<R: Rng + ?Sized>(
        &self,
        dataset: &GeneratedDataset,
        rng: &mut R,
    ) -> SummaryReport {
        match self.mode {
            ReportingMode::Simulated => {
                let descriptive = describe_constructs(self.spec, dataset, rng);
                let paths = simulate_paths(self.spec, rng);
                let fit = FitIndices::simulate(rng);

                SummaryReport {
                    mode: self.mode,
                    descriptive,
                    paths,
                    fit,
                    caveat: SIMULATED_CAVEAT.to_string(),
                    notes: Vec::new(),
                }
            }
        }
    }
}
