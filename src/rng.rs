use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The pseudo-random generator threaded through every stage of a run.
///
/// Each run owns its own instance, so concurrent runs never share state and a fixed
/// seed reproduces the same dataset and report.
pub type SurveyRng = ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> SurveyRng {
    ChaCha8Rng::seed_from_u64(seed)
}
