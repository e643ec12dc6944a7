use crate::dataset::{GeneratedDataset, Response};
use crate::model::ModelSpec;
use rand::Rng;
use rand_distr::StandardNormal;

/// Standard deviation of the measurement noise added to each item.
pub const ITEM_NOISE_SD: f64 = 0.45;
/// Lowest Likert response.
pub const LIKERT_MIN: u8 = 1;
/// Highest Likert response.
pub const LIKERT_MAX: u8 = 5;

/// Expands latent construct scores into observed Likert items.
///
/// Every item of a construct shares the respondent's latent score and adds its own
/// independent noise, which gives correlated but imperfect indicators.
pub struct ItemDiscretizer<'a> {
    spec: &'a ModelSpec,
    noise_sd: f64,
}

impl<'a> ItemDiscretizer<'a> {
    pub fn new(spec: &'a ModelSpec) -> Self {
        Self {
            spec,
            noise_sd: ITEM_NOISE_SD,
        }
    }

    pub fn with_noise(mut self, noise_sd: f64) -> Self {
        self.noise_sd = noise_sd;
        self
    }

    /// Builds the dataset from a `sample_size × constructs` latent score matrix.
    ///
    /// Draws are consumed respondent by respondent, construct by construct, item by item.
    pub fn discretize<R: Rng + ?Sized>(
        &self,
        latent: &[Vec<f64>],
        rng: &mut R,
    ) -> GeneratedDataset {
        let mut dataset = GeneratedDataset::with_layout(self.spec);
        let width = self.spec.total_items();

        for (i, scores) in latent.iter().enumerate() {
            let mut values = Vec::with_capacity(width);
            for (construct, &score) in self.spec.constructs.iter().zip(scores) {
                for _ in 0..construct.items {
                    values.push(likertize(score, self.noise_sd, rng));
                }
            }
            dataset.rows.push(Response { id: i + 1, values });
        }

        dataset
    }
}

/// Adds Gaussian noise to a latent score, rounds half to even, and clamps to 1..=5.
pub fn likertize<R: Rng + ?Sized>(latent: f64, noise_sd: f64, rng: &mut R) -> u8 {
    let z: f64 = rng.sample(StandardNormal);
    to_likert(latent + noise_sd * z)
}

/// Rounds half to even and clamps to the Likert scale.
pub fn to_likert(value: f64) -> u8 {
    value
        .round_ties_even()
        .clamp(LIKERT_MIN as f64, LIKERT_MAX as f64) as u8
}
