use crate::linalg::SquareMatrix;
use crate::model::ModelSpec;

/// Factor converting a structural path coefficient into a pairwise correlation proxy.
pub const PATH_DAMPING: f64 = 0.6;

/// Turns the paths of a `ModelSpec` into a construct-level correlation matrix.
///
/// The result is symmetric with a unit diagonal. It is a simplified proxy, not the
/// correlation matrix implied by a structural model, and it is not checked for
/// positive definiteness here.
pub struct CorrelationBuilder<'a> {
    spec: &'a ModelSpec,
    damping: f64,
}

/// A correlation matrix plus the paths that could not be placed in it.
#[derive(Debug, Clone)]
pub struct CorrelationOutcome {
    pub matrix: SquareMatrix,
    pub skipped_paths: Vec<String>,
}

impl<'a> CorrelationBuilder<'a> {
    pub fn new(spec: &'a ModelSpec) -> Self {
        Self {
            spec,
            damping: PATH_DAMPING,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn build(&self) -> SquareMatrix {
        self.build_with_report().matrix
    }

    /// Builds the matrix, recording every path whose endpoints do not resolve.
    ///
    /// When two paths touch the same unordered pair, the later one wins.
    pub fn build_with_report(&self) -> CorrelationOutcome {
        let index = self.spec.construct_index();
        let mut matrix = SquareMatrix::identity(self.spec.constructs.len());
        let mut skipped_paths = Vec::new();

        for path in &self.spec.paths {
            let (Some(&from), Some(&to)) =
                (index.get(path.from.as_str()), index.get(path.to.as_str()))
            else {
                log::warn!("Skipping path '{}': endpoint is not a known construct", path);
                skipped_paths.push(path.label());
                continue;
            };
            if from == to {
                log::warn!("Skipping path '{}': self-loop", path);
                skipped_paths.push(path.label());
                continue;
            }

            let r = path.coefficient * self.damping;
            matrix[(from, to)] = r;
            matrix[(to, from)] = r;
        }

        log::debug!("--- Construct correlation matrix ---\n{}", matrix);
        CorrelationOutcome {
            matrix,
            skipped_paths,
        }
    }
}
