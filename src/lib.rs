//! # likert-synth - Synthetic Likert Survey Generator
//!
//! **likert-synth** produces realistic-looking Likert-scale (1 to 5) survey datasets from a
//! researcher-specified measurement and structural model, together with descriptive,
//! reliability, path-analysis and model-fit summary tables. It is meant for pilot data,
//! methods teaching and instrument testing, where no real respondents are available.
//!
//! ## Core Workflow
//!
//! A run is a single synchronous pipeline driven by an explicit, seeded generator:
//!
//! 1.  **Describe the model**: Build a `ModelSpec` with named constructs (item count, mean, SD,
//!     role), directed paths between them, a sample size and a seed. Implement `IntoModelSpec`
//!     to translate your own form or UI state.
//! 2.  **Correlate**: Each path becomes a pairwise correlation proxy `coefficient × 0.6`.
//! 3.  **Sample**: Latent construct scores are drawn from a multivariate normal distribution.
//!     A covariance matrix that cannot be factorised is rejected by default; the `Repair` policy
//!     substitutes the nearest valid correlation matrix instead.
//! 4.  **Discretise**: Every item adds independent Gaussian noise (SD 0.45) to its construct's
//!     latent score, rounds half to even and clamps to 1..=5.
//! 5.  **Summarise**: Descriptive moments are computed from the items.
//!
//! The dataset is written as CSV (`survey_data_n{N}.csv`), ready to open in a spreadsheet
//! application; there is no native Excel export. Summary tables can be rendered as aligned
//! text or exported as CSV, each ending with a note that the inferential values are simulated.
//!
//! ## Simulated Statistics
//!
//! Reliability (Cronbach's α), average loadings, path estimates (β, t, p) and fit indices
//! (SRMR, NFI, CFI) are **not estimated**. They are drawn from fixed plausible ranges and
//! echo the configured model; no structural equation model is fitted. Every
//! `SummaryReport` is tagged `ReportingMode::Simulated` and carries this caveat. Moderation
//! and mediation effects are recorded with the model but do not alter the generated data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use likert_synth::prelude::*;
//! use likert_synth::export::{csv, table};
//!
//! fn main() -> Result<()> {
//!     let spec = ModelSpec::new(
//!         vec![
//!             Construct::new("PE", 4, 3.45, 0.42, Role::IV),
//!             Construct::new("ATT", 4, 3.2, 0.45, Role::DV),
//!         ],
//!         500,
//!         2025,
//!     )
//!     .with_path(Path::new("PE", "ATT", 0.3, true));
//!
//!     let output = Synthesizer::builder(spec)
//!         .with_non_psd_policy(NonPsdPolicy::Reject)
//!         .build()
//!         .synthesize()?;
//!
//!     csv::write_dataset_csv(&output.dataset, &csv::default_file_name(output.dataset.len()))?;
//!     println!("{}", table::render_report(&output.report));
//!     Ok(())
//! }
//! ```

pub mod correlation;
pub mod dataset;
pub mod discretizer;
pub mod error;
pub mod export;
pub mod linalg;
pub mod model;
pub mod prelude;
pub mod rng;
pub mod sampler;
pub mod summary;
pub mod synthesizer;

#[cfg(feature = "python-bindings")]
mod python;
