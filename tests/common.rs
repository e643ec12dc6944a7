//! Common test fixtures for building models.
use likert_synth::prelude::*;

/// The two-construct model used throughout the scenarios: `PE` and `ATT`, no paths.
#[allow(dead_code)]
pub fn pe_att_spec(sample_size: usize, seed: u64) -> ModelSpec {
    ModelSpec::new(
        vec![
            Construct::new("PE", 4, 3.45, 0.42, Role::IV),
            Construct::new("ATT", 4, 3.2, 0.45, Role::DV),
        ],
        sample_size,
        seed,
    )
}

/// `PE → ATT` with a significant 0.3 coefficient.
#[allow(dead_code)]
pub fn pe_att_path_spec(sample_size: usize, seed: u64) -> ModelSpec {
    pe_att_spec(sample_size, seed).with_path(Path::new("PE", "ATT", 0.3, true))
}

/// Three constructs with a mix of significant and non-significant paths.
#[allow(dead_code)]
pub fn three_construct_spec(sample_size: usize, seed: u64) -> ModelSpec {
    ModelSpec::new(
        vec![
            Construct::new("TRU", 5, 3.6, 0.5, Role::IV),
            Construct::new("SAT", 4, 3.3, 0.6, Role::Mediator),
            Construct::new("INT", 3, 3.9, 0.4, Role::DV),
        ],
        sample_size,
        seed,
    )
    .with_path(Path::new("TRU", "SAT", 0.45, true))
    .with_path(Path::new("SAT", "INT", 0.35, true))
    .with_path(Path::new("TRU", "INT", 0.1, false))
}

/// Strong paths whose damped correlations cannot coexist: A–B and B–C positive, A–C negative.
///
/// The correlation matrix is `[[1, .6, -.6], [.6, 1, .6], [-.6, .6, 1]]`, which has a negative
/// determinant; factorisation breaks down at `C`.
#[allow(dead_code)]
pub fn conflicting_spec() -> ModelSpec {
    ModelSpec::new(
        vec![
            Construct::new("A", 3, 3.0, 0.5, Role::IV),
            Construct::new("B", 3, 3.0, 0.5, Role::Mediator),
            Construct::new("C", 3, 3.0, 0.5, Role::DV),
        ],
        200,
        7,
    )
    .with_path(Path::new("A", "B", 1.0, true))
    .with_path(Path::new("B", "C", 1.0, true))
    .with_path(Path::new("A", "C", -1.0, true))
}

/// Pearson correlation of two equally long samples.
#[allow(dead_code)]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        sxy += (a - mx) * (b - my);
        sxx += (a - mx) * (a - mx);
        syy += (b - my) * (b - my);
    }
    sxy / (sxx * syy).sqrt()
}

/// Whether `value` lies in `[low, high]`, allowing for floating-point rounding at the ends.
#[allow(dead_code)]
pub fn within(value: f64, low: f64, high: f64) -> bool {
    const EPS: f64 = 1e-9;
    value >= low - EPS && value <= high + EPS
}
