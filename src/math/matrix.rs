use rand::Rng;
use serde::{Serialize, Deserialize};

/// Row-major dense matrix. Row `i` holds the outgoing weights of source unit `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples every entry uniformly from `[-range, range]`.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, range: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        res.randomize(range, rng);
        res
    }

    /// Overwrites every entry in place with a fresh sample from `[-range, range]`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, range: f64, rng: &mut R) {
        for row in &mut self.data {
            for value in row.iter_mut() {
                *value = rng.gen_range(-range..=range);
            }
        }
    }

    /// Row vector times matrix: `out[j] = Σ_i v[i] * self[i][j]`.
    ///
    /// `v.len()` must equal `rows`; callers validate lengths at the boundary.
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.rows);
        let mut res = vec![0.0; self.cols];

        for (row, &x) in self.data.iter().zip(v) {
            for (acc, &w) in res.iter_mut().zip(row) {
                *acc += x * w;
            }
        }

        res
    }

    /// Matrix times column vector: `out[i] = Σ_j self[i][j] * v[j]`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        self.data.iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// Adds `scale * a[i] * b[j]` to every entry.
    pub fn add_outer(&mut self, a: &[f64], b: &[f64], scale: f64) {
        debug_assert_eq!(a.len(), self.rows);
        debug_assert_eq!(b.len(), self.cols);
        for (row, &ai) in self.data.iter_mut().zip(a) {
            for (value, &bj) in row.iter_mut().zip(b) {
                *value += scale * ai * bj;
            }
        }
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
