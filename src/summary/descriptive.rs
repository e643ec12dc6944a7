use super::Band;
use crate::dataset::GeneratedDataset;
use crate::model::ModelSpec;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Band the simulated Cronbach's α is drawn from.
pub const RELIABILITY_BAND: Band = Band::new(0.75, 0.95);
/// Band the simulated average factor loading is drawn from.
pub const LOADING_BAND: Band = Band::new(0.72, 0.84);

/// Moment statistics of a sample.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub sd: f64,
    /// Biased moment estimator `m3 / m2^1.5`.
    pub skewness: f64,
    /// Excess kurtosis `m4 / m2² − 3`.
    pub kurtosis: f64,
}

impl Moments {
    /// Computes the moments of `values`. Degenerate samples (constant values or fewer
    /// than two observations) report zero for the undefined statistics.
    pub fn of(values: &[f64]) -> Self {
        let n = values.len() as f64;
        if values.is_empty() {
            return Self {
                mean: 0.0,
                sd: 0.0,
                skewness: 0.0,
                kurtosis: 0.0,
            };
        }

        let mean = values.iter().sum::<f64>() / n;
        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for &x in values {
            let d = x - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        let sd = if values.len() > 1 {
            (m2 / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let (m2, m3, m4) = (m2 / n, m3 / n, m4 / n);

        let (skewness, kurtosis) = if m2 > 0.0 {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            mean,
            sd,
            skewness,
            kurtosis,
        }
    }
}

/// One row of the descriptive table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DescriptiveRow {
    pub construct: String,
    /// Mean of the per-respondent item means.
    pub mean: f64,
    pub sd: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    /// Simulated, see [`RELIABILITY_BAND`].
    pub reliability: f64,
    /// Simulated, see [`LOADING_BAND`].
    pub avg_loading: f64,
}

/// Describes every construct by stacking its item columns into one sample.
pub(super) fn describe_constructs<R: Rng + ?Sized>(
    spec: &ModelSpec,
    dataset: &GeneratedDataset,
    rng: &mut R,
) -> Vec<DescriptiveRow> {
    spec.constructs
        .iter()
        .map(|construct| {
            let rows = dataset.construct_items(&construct.name).unwrap_or_default();
            let stacked: Vec<f64> = rows
                .iter()
                .flat_map(|r| r.iter().map(|&v| v as f64))
                .collect();
            let moments = Moments::of(&stacked);

            let mean = if rows.is_empty() {
                0.0
            } else {
                rows.iter()
                    .map(|r| r.iter().map(|&v| v as f64).sum::<f64>() / r.len() as f64)
                    .sum::<f64>()
                    / rows.len() as f64
            };

            DescriptiveRow {
                construct: construct.name.clone(),
                mean,
                sd: moments.sd,
                skewness: moments.skewness,
                kurtosis: moments.kurtosis,
                reliability: RELIABILITY_BAND.draw(rng),
                avg_loading: LOADING_BAND.draw(rng),
            }
        })
        .collect()
}
