/// Dense matrix multiplication — naive O(n^3).
///
/// Evaluation order is fixed: rows i, columns j, and an innermost k loop
/// accumulating into a scalar. Reordering changes low-order bits of the
/// checksum.

use tracing::debug;

/// Matrix dimension used by the suite.
pub const DEFAULT_N: usize = 200;

/// Square row-major matrix of f64.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build an `n x n` matrix from a function of (row, column).
    pub fn from_fn(n: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// `A[i][j] = ((i*n + j) mod 1000) / 1000`
    pub fn left_operand(n: usize) -> Self {
        Self::from_fn(n, |i, j| ((i * n + j) % 1000) as f64 / 1000.0)
    }

    /// `B[i][j] = ((j*n + i) mod 1000) / 1000`
    pub fn right_operand(n: usize) -> Self {
        Self::from_fn(n, |i, j| ((j * n + i) % 1000) as f64 / 1000.0)
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// `self * rhs` with the i -> j -> k loop order.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.n, rhs.n, "Dimension mismatch: {} vs {}", self.n, rhs.n);
        let n = self.n;
        let mut out = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self.get(i, k) * rhs.get(k, j);
                }
                out[i * n + j] = sum;
            }
        }
        Matrix { n, data: out }
    }

    /// Sum of every element in row-major order.
    pub fn checksum(&self) -> f64 {
        let mut total = 0.0;
        for v in &self.data {
            total += v;
        }
        total
    }
}

/// Multiply the two closed-form operands of size `n` and return the checksum.
pub fn matrix_mult(n: usize) -> f64 {
    let a = Matrix::left_operand(n);
    let b = Matrix::right_operand(n);
    let checksum = a.multiply(&b).checksum();
    debug!(n, checksum, "matrix_mult complete");
    checksum
}

pub fn report_lines(n: usize, checksum: f64) -> Vec<String> {
    vec![format!("matrix_mult({}): checksum = {:.6}", n, checksum)]
}
