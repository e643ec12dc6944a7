//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the likert-synth crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use likert_synth::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let spec = ModelSpec::from_file("path/to/model.json")?;
//! let output = Synthesizer::new(spec).synthesize()?;
//!
//! println!("Generated {} responses", output.dataset.len());
//! for row in &output.report.descriptive {
//!     println!("{}: mean {:.3}", row.construct, row.mean);
//! }
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::correlation::CorrelationBuilder;
pub use crate::discretizer::ItemDiscretizer;
pub use crate::sampler::{LatentSampler, NonPsdPolicy};
pub use crate::summary::{ReportingMode, SummaryEngine, SummaryReport};
pub use crate::synthesizer::{GenerationOutput, GenerationSettings, Synthesizer};

// Model types
pub use crate::model::{Construct, IntoModelSpec, Mediation, Moderation, ModelSpec, Path, Role};

// Outputs
pub use crate::dataset::{GeneratedDataset, Response};
pub use crate::export::RunArtifact;
pub use crate::linalg::SquareMatrix;

// Error types
pub use crate::error::{ConfigError, ExportError, SamplingError, SynthesisError};

// Randomness
pub use crate::rng::{SurveyRng, seeded_rng};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
