use super::Band;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SRMR_BAND: Band = Band::new(0.03, 0.05);
pub const NFI_BAND: Band = Band::new(0.90, 0.98);
pub const CFI_BAND: Band = Band::new(0.92, 0.99);

/// Conventional cut-off below which SRMR indicates good fit.
pub const SRMR_GOOD_BELOW: f64 = 0.08;
/// Conventional cut-off above which NFI and CFI indicate good fit.
pub const INCREMENTAL_GOOD_ABOVE: f64 = 0.90;

/// Simulated model-fit indices for a run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FitIndices {
    pub srmr: f64,
    pub nfi: f64,
    pub cfi: f64,
}

impl FitIndices {
    pub(super) fn simulate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let srmr = SRMR_BAND.draw(rng);
        let nfi = NFI_BAND.draw(rng);
        let cfi = CFI_BAND.draw(rng);
        Self { srmr, nfi, cfi }
    }

    /// `(name, value, criterion)` triples for display.
    pub fn entries(&self) -> [(&'static str, f64, &'static str); 3] {
        [
            ("SRMR", self.srmr, "< 0.08 = Good"),
            ("NFI", self.nfi, "> 0.90 = Good"),
            ("CFI", self.cfi, "> 0.90 = Good"),
        ]
    }

    pub fn meets_conventional_cutoffs(&self) -> bool {
        self.srmr < SRMR_GOOD_BELOW
            && self.nfi > INCREMENTAL_GOOD_ABOVE
            && self.cfi > INCREMENTAL_GOOD_ABOVE
    }
}
