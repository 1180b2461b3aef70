use std::ops::Index;

use nalgebra::{DMatrix, DVector};

use crate::error::{MatrixError, Result};

/// A dense, rectangular matrix of `f64` values.
///
/// Storage is delegated to [`nalgebra::DMatrix`]; this wrapper only exposes
/// the shape-checked operations the solver needs:
/// - construction from rows or from flat row-major data
/// - inversion through an LU decomposition with partial pivoting
/// - matrix-matrix and matrix-vector multiplication
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    inner: DMatrix<f64>,
}

const MATRIX_VECTOR_OP: &str = "matrix-vector multiplication";
const MATRIX_MATRIX_OP: &str = "matrix multiplication";
const INVERSION_OP: &str = "inversion";

impl Matrix {
    /// Fallible constructor that validates the matrix shape.
    pub fn try_new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = Self::ensure_rectangular_rows(&rows)?;
        let row_count = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        Ok(Self {
            inner: DMatrix::from_row_slice(row_count, cols, &flat),
        })
    }

    /// Build a `rows x cols` matrix from row-major flat data.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(MatrixError::FlatLength {
                rows,
                cols,
                expected,
                found: data.len(),
            }
            .into());
        }
        Ok(Self {
            inner: DMatrix::from_row_slice(rows, cols, data),
        })
    }

    /// Single-column matrix holding `values` top to bottom.
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            inner: DMatrix::from_column_slice(values.len(), 1, values),
        }
    }

    /// Power-basis matrix: entry `(i, k)` is `nodes[i]^k` for `k` in `0..cols`.
    ///
    /// Powers are accumulated by repeated multiplication along each row so
    /// that column `k` is exactly `nodes[i] * entry(i, k - 1)`.
    pub fn vandermonde(nodes: &[f64], cols: usize) -> Self {
        let mut inner = DMatrix::zeros(nodes.len(), cols);
        for (i, &x) in nodes.iter().enumerate() {
            let mut power = 1.0;
            for k in 0..cols {
                inner[(i, k)] = power;
                power *= x;
            }
        }
        Self { inner }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.inner.ncols()
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Copy out column `index`, or `None` when it does not exist.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.cols())
            .then(|| self.inner.column(index).iter().copied().collect())
    }

    /// Copy out all columns in order.
    pub fn columns(&self) -> Vec<Vec<f64>> {
        self.inner
            .column_iter()
            .map(|col| col.iter().copied().collect())
            .collect()
    }

    /// Invert a square matrix.
    ///
    /// Fails with [`MatrixError::Singular`] when the LU factorisation hits a
    /// zero pivot, and with [`MatrixError::NonFinite`] when either the input or
    /// the computed inverse holds a non-finite entry.
    pub fn try_inverse(&self) -> Result<Self> {
        let (rows, cols) = self.shape();
        if rows == 0 {
            return Err(MatrixError::Empty {
                operation: INVERSION_OP,
            }
            .into());
        }
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                operation: INVERSION_OP,
                rows,
                cols,
            }
            .into());
        }

        ensure_finite(INVERSION_OP, self.inner.iter())?;

        let inverse = self
            .inner
            .clone()
            .lu()
            .try_inverse()
            .ok_or(MatrixError::Singular { size: rows })?;
        ensure_finite(INVERSION_OP, inverse.iter())?;

        Ok(Self { inner: inverse })
    }

    /// Fallible matrix-matrix multiplication with shape checks.
    ///
    /// Fails with [`MatrixError::NonFinite`] when the product overflows.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        self.validate_multiplication(MATRIX_MATRIX_OP, rhs.rows(), rhs.cols())?;
        let product = &self.inner * &rhs.inner;
        ensure_finite(MATRIX_MATRIX_OP, product.iter())?;
        Ok(Self { inner: product })
    }

    /// Fallible matrix-vector multiplication with shape checks.
    ///
    /// Fails with [`MatrixError::NonFinite`] when the product overflows.
    pub fn try_mul_vector(&self, v: &[f64]) -> Result<Vec<f64>> {
        self.validate_multiplication(MATRIX_VECTOR_OP, v.len(), 1)?;
        let product = &self.inner * DVector::from_column_slice(v);
        ensure_finite(MATRIX_VECTOR_OP, product.iter())?;
        Ok(product.iter().copied().collect())
    }

    fn validate_multiplication(
        &self,
        operation: &'static str,
        right_rows: usize,
        right_cols: usize,
    ) -> core::result::Result<(), MatrixError> {
        if self.rows() == 0 {
            return Err(MatrixError::Empty { operation });
        }
        if self.cols() != right_rows {
            return Err(MatrixError::ShapeMismatch {
                operation,
                left_rows: self.rows(),
                left_cols: self.cols(),
                right_rows,
                right_cols,
            });
        }
        Ok(())
    }

    fn ensure_rectangular_rows(
        rows: &[Vec<f64>],
    ) -> core::result::Result<usize, MatrixError> {
        if let Some((first, rest)) = rows.split_first() {
            let expected = first.len();
            for (offset, row) in rest.iter().enumerate() {
                if row.len() != expected {
                    return Err(MatrixError::Ragged {
                        row: offset + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
            Ok(expected)
        } else {
            Ok(0)
        }
    }
}

fn ensure_finite<'a>(
    operation: &'static str,
    mut values: impl Iterator<Item = &'a f64>,
) -> core::result::Result<(), MatrixError> {
    if values.all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(MatrixError::NonFinite { operation })
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = crate::error::Error;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self> {
        Self::try_new(value)
    }
}

/// Immutable indexing by `(row, col)`.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[index]
    }
}
