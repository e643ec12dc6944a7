use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Relative size below which a Cholesky pivot is treated as zero.
const PIVOT_TOLERANCE: f64 = 1e-10;
/// Upper bound on cyclic Jacobi sweeps; small symmetric matrices converge in well under ten.
const MAX_JACOBI_SWEEPS: usize = 64;
const JACOBI_OFF_DIAGONAL_EPS: f64 = 1e-22;

/// A dense, row-major square matrix of `f64`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<f64>,
}

/// The point at which a Cholesky factorisation failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotFailure {
    pub index: usize,
    pub pivot: f64,
}

impl SquareMatrix {
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Builds a matrix from rows. Returns `None` if the rows are not square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let dim = rows.len();
        if rows.iter().any(|r| r.len() != dim) {
            return None;
        }
        Some(Self {
            dim,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.dim).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.dim)
            .all(|i| (0..i).all(|j| (self[(i, j)] - self[(j, i)]).abs() <= tolerance))
    }

    /// Scales a correlation matrix into a covariance matrix: `cov[i][j] = sd[i] * sd[j] * corr[i][j]`.
    pub fn scale_by(&self, sds: &[f64]) -> Self {
        let mut out = self.clone();
        for i in 0..self.dim {
            for j in 0..self.dim {
                out[(i, j)] = sds[i] * sds[j] * self[(i, j)];
            }
        }
        out
    }

    /// Lower-triangular Cholesky factor `L` with `self = L Lᵀ`.
    ///
    /// Fails on the first pivot that is not strictly positive relative to its diagonal entry.
    pub fn cholesky(&self) -> Result<Self, PivotFailure> {
        let n = self.dim;
        let mut l = Self::zeros(n);

        for j in 0..n {
            let mut pivot = self[(j, j)];
            for k in 0..j {
                pivot -= l[(j, k)] * l[(j, k)];
            }
            let floor = PIVOT_TOLERANCE * self[(j, j)].abs();
            if !pivot.is_finite() || pivot <= floor {
                return Err(PivotFailure { index: j, pivot });
            }
            let d = pivot.sqrt();
            l[(j, j)] = d;

            for i in (j + 1)..n {
                let mut s = self[(i, j)];
                for k in 0..j {
                    s -= l[(i, k)] * l[(j, k)];
                }
                l[(i, j)] = s / d;
            }
        }

        Ok(l)
    }

    /// Multiplies a lower-triangular matrix by a vector, skipping the zero upper half.
    pub fn lower_mul_vec(&self, v: &[f64]) -> Vec<f64> {
        (0..self.dim)
            .map(|i| (0..=i).map(|k| self[(i, k)] * v[k]).sum())
            .collect()
    }

    /// Eigen-decomposition of a symmetric matrix by cyclic Jacobi rotations.
    ///
    /// Returns the eigenvalues and a matrix whose columns are the matching eigenvectors.
    pub fn symmetric_eigen(&self) -> (Vec<f64>, Self) {
        let n = self.dim;
        let mut a = self.clone();
        let mut v = Self::identity(n);

        for _ in 0..MAX_JACOBI_SWEEPS {
            let off: f64 = (0..n)
                .flat_map(|i| (0..i).map(move |j| (i, j)))
                .map(|(i, j)| a[(i, j)] * a[(i, j)])
                .sum();
            if off < JACOBI_OFF_DIAGONAL_EPS {
                break;
            }

            for p in 0..n {
                for q in (p + 1)..n {
                    let apq = a[(p, q)];
                    if apq.abs() < f64::MIN_POSITIVE {
                        continue;
                    }
                    let theta = (a[(q, q)] - a[(p, p)]) / (2.0 * apq);
                    let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                    let c = 1.0 / (t * t + 1.0).sqrt();
                    let s = t * c;

                    for k in 0..n {
                        let (akp, akq) = (a[(k, p)], a[(k, q)]);
                        a[(k, p)] = c * akp - s * akq;
                        a[(k, q)] = s * akp + c * akq;
                    }
                    for k in 0..n {
                        let (apk, aqk) = (a[(p, k)], a[(q, k)]);
                        a[(p, k)] = c * apk - s * aqk;
                        a[(q, k)] = s * apk + c * aqk;
                    }
                    for k in 0..n {
                        let (vkp, vkq) = (v[(k, p)], v[(k, q)]);
                        v[(k, p)] = c * vkp - s * vkq;
                        v[(k, q)] = s * vkp + c * vkq;
                    }
                }
            }
        }

        let eigenvalues = (0..n).map(|i| a[(i, i)]).collect();
        (eigenvalues, v)
    }

    /// Projects a symmetric unit-diagonal matrix onto a positive-definite correlation matrix.
    ///
    /// Eigenvalues below `floor` are raised to it, the matrix is reassembled, and the result
    /// is rescaled back to a unit diagonal.
    pub fn nearest_correlation(&self, floor: f64) -> Self {
        let n = self.dim;
        let (values, vectors) = self.symmetric_eigen();
        let clipped: Vec<f64> = values.iter().map(|&l| l.max(floor)).collect();

        let mut rebuilt = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                rebuilt[(i, j)] = (0..n)
                    .map(|k| vectors[(i, k)] * clipped[k] * vectors[(j, k)])
                    .sum();
            }
        }

        let diag: Vec<f64> = (0..n).map(|i| rebuilt[(i, i)].sqrt()).collect();
        let mut out = Self::identity(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    out[(i, j)] = rebuilt[(i, j)] / (diag[i] * diag[j]);
                }
            }
        }
        out
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.dim + j]
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim {
            let cells: Vec<String> = self.row(i).iter().map(|v| format!("{:>8.4}", v)).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
