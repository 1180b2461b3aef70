use thiserror::Error;

pub mod polynomial {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("interpolation nodes {first} and {second} share the value {value}")]
        DuplicateNode {
            first: usize,
            second: usize,
            value: f64,
        },
        #[error("{xs} nodes but {ys} values supplied for interpolation")]
        LengthMismatch { xs: usize, ys: usize },
        #[error("interpolated coefficients overflow f64")]
        NonFinite,
    }
}

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("matrix cannot be empty during {operation}")]
        Empty { operation: &'static str },
        #[error("matrix is ragged: row {row} has {found} columns but expected {expected}")]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error("flat data has {found} entries but a {rows}x{cols} matrix needs {expected}")]
        FlatLength {
            rows: usize,
            cols: usize,
            expected: usize,
            found: usize,
        },
        #[error("matrix must be square for {operation}, got {rows}x{cols}")]
        NotSquare {
            operation: &'static str,
            rows: usize,
            cols: usize,
        },
        #[error(
            "shape mismatch during {operation}: {left_rows}x{left_cols} vs {right_rows}x{right_cols}"
        )]
        ShapeMismatch {
            operation: &'static str,
            left_rows: usize,
            left_cols: usize,
            right_rows: usize,
            right_cols: usize,
        },
        #[error("{size}x{size} matrix is singular")]
        Singular { size: usize },
        #[error("non-finite value during {operation}: magnitudes exceed f64 range")]
        NonFinite { operation: &'static str },
    }
}

pub use matrix::Error as MatrixError;
pub use polynomial::Error as PolynomialError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type Error = MathError;

impl MathError {
    /// Whether this error reports a system with no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            MathError::Matrix(MatrixError::Singular { .. })
                | MathError::Polynomial(PolynomialError::DuplicateNode { .. })
        )
    }

    /// Whether a value left the finite `f64` range along the way.
    pub fn is_non_finite(&self) -> bool {
        matches!(
            self,
            MathError::Matrix(MatrixError::NonFinite { .. })
                | MathError::Polynomial(PolynomialError::NonFinite)
        )
    }
}
