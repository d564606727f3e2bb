use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{Dim, LinalgError, Result};
use crate::math::vector::Vector;

/// Dense row-major matrix of `f64`.
///
/// Rows always have equal length: every constructor checks the shape, so
/// the operations below never see ragged input. A missing operand is
/// expressed as `None` where an operation accepts one, never as an empty
/// matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LinalgError::DimensionMismatch {
                expected: Dim::Shape(rows, cols),
                found: Dim::Len(data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a list of rows.
    ///
    /// The first row fixes the column count; any row of a different length
    /// yields [`LinalgError::RaggedMatrix`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalgError::RaggedMatrix {
                    row: idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("matrix shape {}x{} overflows usize", rows, cols));
        Self {
            data: vec![0.0; len],
            rows,
            cols,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    /// Exact elementwise equality. A missing operand or a shape difference
    /// compares unequal.
    pub fn is_equal<'a>(&self, other: impl Into<Option<&'a Matrix>>) -> bool {
        match other.into() {
            Some(other) => self.shape() == other.shape() && self.data == other.data,
            None => false,
        }
    }

    /// Elementwise equality up to an absolute tolerance.
    pub fn is_similar<'a>(&self, other: impl Into<Option<&'a Matrix>>, tol: f64) -> bool {
        match other.into() {
            Some(other) => {
                self.shape() == other.shape()
                    && self
                        .data
                        .iter()
                        .zip(other.data.iter())
                        .all(|(a, b)| (a - b).abs() <= tol)
            }
            None => false,
        }
    }

    /// Copy of row `i`.
    pub fn row(&self, i: isize) -> Result<Vector> {
        let idx = checked_index(i, self.rows)?;
        Ok(Vector::from(self.row_slice(idx)))
    }

    /// Copy of column `i`.
    pub fn col(&self, i: isize) -> Result<Vector> {
        let idx = checked_index(i, self.cols)?;
        Ok((0..self.rows).map(|r| self.data[self.offset(r, idx)]).collect())
    }

    /// Return a new matrix with `column` inserted before column `index`.
    /// `index == ncols()` appends.
    pub fn insert_col(&self, index: isize, column: &[f64]) -> Result<Matrix> {
        if column.len() != self.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: Dim::Len(self.rows),
                found: Dim::Len(column.len()),
            });
        }
        let at = checked_index(index, self.cols + 1)?;

        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for (row, value) in column.iter().enumerate() {
            let slice = self.row_slice(row);
            data.extend_from_slice(&slice[..at]);
            data.push(*value);
            data.extend_from_slice(&slice[at..]);
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            cols: new_cols,
        })
    }

    pub fn add<'a>(&self, other: impl Into<Option<&'a Matrix>>) -> Result<Matrix> {
        self.zip_map(other.into(), |a, b| a + b)
    }

    pub fn subtract<'a>(&self, other: impl Into<Option<&'a Matrix>>) -> Result<Matrix> {
        self.zip_map(other.into(), |a, b| a - b)
    }

    fn zip_map<F>(&self, other: Option<&Matrix>, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        let other = other.ok_or(LinalgError::NilOperand)?;
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                expected: Dim::Shape(self.rows, self.cols),
                found: Dim::Shape(other.rows, other.cols),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix product `self * other`.
    pub fn multiply_by(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(LinalgError::IncompatibleDimensions {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a_ik = self.data[self.offset(i, k)];
                let out_row = &mut out.data[i * other.cols..(i + 1) * other.cols];
                for (dst, b_kj) in out_row.iter_mut().zip(other.row_slice(k)) {
                    *dst += a_ik * b_kj;
                }
            }
        }
        Ok(out)
    }

    pub fn invert(&self) -> Result<Matrix> {
        self.invert_with(&SolverConfig::default())
    }

    /// Inverse via `self \ I`.
    pub fn invert_with(&self, config: &SolverConfig) -> Result<Matrix> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.left_divide_with(&Matrix::identity(self.rows), config)
    }

    pub fn left_divide(&self, rhs: &Matrix) -> Result<Matrix> {
        self.left_divide_with(rhs, &SolverConfig::default())
    }

    /// Solve `self * X = rhs` for `X`.
    ///
    /// Square systems are reduced directly. Any other shape is solved in
    /// the least-squares sense through the normal equations
    /// `(Aᵗ A) X = Aᵗ rhs`, which is singular for under-determined systems.
    pub fn left_divide_with(&self, rhs: &Matrix, config: &SolverConfig) -> Result<Matrix> {
        if self.rows != rhs.rows {
            return Err(LinalgError::IncompatibleDimensions {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        if self.is_square() {
            log::debug!(
                "Solving square {}x{} system with {} right-hand side(s)",
                self.rows,
                self.cols,
                rhs.cols
            );
            gauss_jordan(self, rhs, config)
        } else {
            log::debug!(
                "Solving {}x{} system through normal equations",
                self.rows,
                self.cols
            );
            let at = self.transpose();
            let ata = at.multiply_by(self)?;
            let atb = at.multiply_by(rhs)?;
            gauss_jordan(&ata, &atb, config)
        }
    }

    fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            let (ia, ib) = (self.offset(a, j), self.offset(b, j));
            self.data.swap(ia, ib);
        }
    }

    fn scale_row(&mut self, row: usize, factor: f64) {
        let start = self.offset(row, 0);
        for v in &mut self.data[start..start + self.cols] {
            *v *= factor;
        }
    }

    /// row[target] -= factor * row[source]
    fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        for j in 0..self.cols {
            let s = self.data[self.offset(source, j)];
            let t = self.offset(target, j);
            self.data[t] -= factor * s;
        }
    }
}

fn checked_index(i: isize, bound: usize) -> Result<usize> {
    if i < 0 {
        return Err(LinalgError::IndexNegative(i));
    }
    let idx = i as usize;
    if idx >= bound {
        return Err(LinalgError::IndexOutOfRange { index: idx, bound });
    }
    Ok(idx)
}

/// Gauss-Jordan elimination on the augmented system `[a | b]`.
///
/// The left block is reduced to the identity with partial pivoting; the
/// right block then holds the solution. `a` must be square with as many
/// rows as `b`.
fn gauss_jordan(a: &Matrix, b: &Matrix, config: &SolverConfig) -> Result<Matrix> {
    let n = a.rows;
    let mut lhs = a.clone();
    let mut rhs = b.clone();
    // Relative to the largest entry, so uniformly small systems still solve.
    let threshold = config.pivot_tolerance * a.max_abs();

    for k in 0..n {
        // Find pivot: largest |lhs[i][k]| for i >= k
        let mut pivot_row = k;
        let mut max_val = lhs[(k, k)].abs();
        for i in (k + 1)..n {
            let v = lhs[(i, k)].abs();
            if v > max_val {
                max_val = v;
                pivot_row = i;
            }
        }

        // Negated so that a NaN pivot is also rejected.
        if !(max_val > threshold) || !max_val.is_finite() {
            log::debug!(
                "No usable pivot in column {} (max |a| = {:e}, threshold {:e})",
                k,
                max_val,
                threshold
            );
            return Err(LinalgError::Singular { col: k });
        }

        if pivot_row != k {
            log::trace!("Swapping rows {} and {} (pivot {:e})", k, pivot_row, max_val);
            lhs.swap_rows(k, pivot_row);
            rhs.swap_rows(k, pivot_row);
        }

        let pivot_inv = lhs[(k, k)].recip();
        lhs.scale_row(k, pivot_inv);
        rhs.scale_row(k, pivot_inv);

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = lhs[(i, k)];
            if factor != 0.0 {
                lhs.sub_scaled_row(i, k, factor);
                rhs.sub_scaled_row(i, k, factor);
            }
        }
    }

    Ok(rhs)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(&value)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Vector::from(self.row_slice(row)))?;
        }
        Ok(())
    }
}
