use crate::error::SamplingError;
use crate::linalg::SquareMatrix;
use crate::model::ModelSpec;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Smallest eigenvalue kept when a correlation matrix is repaired.
pub const REPAIR_EIGEN_FLOOR: f64 = 1e-6;

/// What the sampler does when the covariance matrix cannot be factorised.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonPsdPolicy {
    /// Fail the run with [`SamplingError::NotPositiveDefinite`]. Nothing is sampled.
    ///
    /// The factorisation needs strictly positive pivots, so singular and near-singular
    /// matrices (e.g. two constructs correlated at exactly 1) are rejected as well.
    /// Use [`NonPsdPolicy::Repair`] to sample from such models.
    #[default]
    Reject,
    /// Replace the correlation matrix with its nearest positive-definite correlation
    /// matrix (eigenvalue clipping) and sample from that instead.
    Repair,
}

/// Continuous latent scores, one row per respondent and one column per construct.
#[derive(Debug, Clone, PartialEq)]
pub struct LatentSample {
    pub scores: Vec<Vec<f64>>,
    /// The correlation matrix actually sampled from.
    pub correlation: SquareMatrix,
    /// Whether the configured correlation matrix had to be repaired first.
    pub repaired: bool,
}

/// Draws multivariate-normal latent construct scores.
pub struct LatentSampler<'a> {
    spec: &'a ModelSpec,
    policy: NonPsdPolicy,
}

impl<'a> LatentSampler<'a> {
    pub fn new(spec: &'a ModelSpec) -> Self {
        Self {
            spec,
            policy: NonPsdPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: NonPsdPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Samples `sample_size` latent vectors with the construct means and
    /// `cov[i][j] = sd[i] * sd[j] * corr[i][j]`.
    ///
    /// Each row consumes exactly one standard-normal draw per construct, in construct order.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        correlation: &SquareMatrix,
        rng: &mut R,
    ) -> Result<LatentSample, SamplingError> {
        let n = self.spec.constructs.len();
        if correlation.dim() != n {
            return Err(SamplingError::DimensionMismatch {
                expected: n,
                found: correlation.dim(),
            });
        }

        let means: Vec<f64> = self.spec.constructs.iter().map(|c| c.mean).collect();
        let sds: Vec<f64> = self.spec.constructs.iter().map(|c| c.sd).collect();
        let (factor, correlation, repaired) = self.factorise(correlation, &sds)?;

        let mut z = vec![0.0; n];
        let scores = (0..self.spec.sample_size)
            .map(|_| {
                for slot in z.iter_mut() {
                    *slot = rng.sample(StandardNormal);
                }
                factor
                    .lower_mul_vec(&z)
                    .into_iter()
                    .zip(&means)
                    .map(|(dx, mean)| mean + dx)
                    .collect::<Vec<f64>>()
            })
            .collect();

        Ok(LatentSample {
            scores,
            correlation,
            repaired,
        })
    }

    /// Returns the Cholesky factor of the covariance matrix, applying the non-PSD policy.
    fn factorise(
        &self,
        correlation: &SquareMatrix,
        sds: &[f64],
    ) -> Result<(SquareMatrix, SquareMatrix, bool), SamplingError> {
        let covariance = correlation.scale_by(sds);
        match covariance.cholesky() {
            Ok(factor) => Ok((factor, correlation.clone(), false)),
            Err(failure) => match self.policy {
                NonPsdPolicy::Reject => {
                    Err(self.not_positive_definite(failure.index, failure.pivot))
                }
                NonPsdPolicy::Repair => {
                    log::warn!(
                        "Covariance matrix is not positive definite at construct '{}'; repairing the correlation matrix",
                        self.spec.constructs[failure.index].name
                    );
                    let repaired = correlation.nearest_correlation(REPAIR_EIGEN_FLOOR);
                    log::debug!("--- Repaired correlation matrix ---\n{}", repaired);
                    let factor = repaired
                        .scale_by(sds)
                        .cholesky()
                        .map_err(|f| self.not_positive_definite(f.index, f.pivot))?;
                    Ok((factor, repaired, true))
                }
            },
        }
    }

    fn not_positive_definite(&self, index: usize, pivot: f64) -> SamplingError {
        SamplingError::NotPositiveDefinite {
            construct: self.spec.constructs[index].name.clone(),
            pivot,
        }
    }
}
