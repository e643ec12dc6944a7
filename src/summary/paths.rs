use super::Band;
use crate::model::ModelSpec;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Perturbation added to the configured coefficient of a significant path.
pub const SIGNIFICANT_BETA_NOISE: Band = Band::new(-0.05, 0.05);
pub const SIGNIFICANT_T_BAND: Band = Band::new(2.5, 5.5);
pub const NON_SIGNIFICANT_BETA_BAND: Band = Band::new(0.0, 0.15);
pub const NON_SIGNIFICANT_T_BAND: Band = Band::new(0.5, 2.0);

pub const SIGNIFICANT_P_LABEL: &str = "< 0.001";
pub const NON_SIGNIFICANT_P_LABEL: &str = "> 0.05";

/// One row of the simulated path table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathRow {
    /// Display label, `from → to`.
    pub path: String,
    pub from: String,
    pub to: String,
    pub beta: f64,
    pub t_value: f64,
    pub p_value: String,
    pub significant: bool,
    /// Whether both endpoints named configured constructs.
    pub resolved: bool,
}

impl PathRow {
    pub fn significance_label(&self) -> &'static str {
        if self.significant { "Yes" } else { "No" }
    }
}

/// Echoes each configured path with values consistent with its significance flag.
pub(super) fn simulate_paths<R: Rng + ?Sized>(spec: &ModelSpec, rng: &mut R) -> Vec<PathRow> {
    let index = spec.construct_index();
    spec.paths
        .iter()
        .map(|path| {
            let (beta, t_value, p_value) = if path.significant {
                let beta = path.coefficient + SIGNIFICANT_BETA_NOISE.draw(rng);
                (beta, SIGNIFICANT_T_BAND.draw(rng), SIGNIFICANT_P_LABEL)
            } else {
                let beta = NON_SIGNIFICANT_BETA_BAND.draw(rng);
                (beta, NON_SIGNIFICANT_T_BAND.draw(rng), NON_SIGNIFICANT_P_LABEL)
            };

            PathRow {
                path: path.label(),
                from: path.from.clone(),
                to: path.to.clone(),
                beta,
                t_value,
                p_value: p_value.to_string(),
                significant: path.significant,
                resolved: index.contains_key(path.from.as_str())
                    && index.contains_key(path.to.as_str()),
            }
        })
        .collect()
}
