use std::fmt;

use polyinfer_math::MathError;
use thiserror::Error;

/// Result type specialized for inference operations.
pub type InferResult<T> = std::result::Result<T, InferError>;

/// Errors that can arise while inferring or evaluating a polynomial.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferError {
    #[error("cannot infer a polynomial from an empty sample set")]
    EmptyInput,
    #[error(
        "basis matrix for {samples} samples is singular: input coordinates must be pairwise distinct"
    )]
    SingularMatrix { samples: usize },
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    #[error("{samples} samples exceed the configured limit of {limit}")]
    TooManySamples { samples: usize, limit: usize },
    #[error(transparent)]
    Math(MathError),
}

impl InferError {
    /// Lift a numeric failure, reporting singular systems of `samples` rows
    /// as [`InferError::SingularMatrix`].
    pub(crate) fn from_math(err: MathError, samples: usize) -> Self {
        if err.is_singular() {
            InferError::SingularMatrix { samples }
        } else {
            InferError::Math(err)
        }
    }
}

/// Rejections raised while coercing caller data into samples.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("sample {index}: {field} is not representable as f64")]
    NotNumeric { index: usize, field: Field },
    #[error("sample {index}: {field} is not finite ({value})")]
    NotFinite {
        index: usize,
        field: Field,
        value: f64,
    },
    #[error("sample {index} has {found} output dimensions but expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("vector samples need at least one output dimension")]
    NoDimensions,
    #[error("{len} interleaved coefficients cannot be split into {dimensions} dimensions")]
    Interleaved { len: usize, dimensions: usize },
}

/// Which part of a sample failed coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Input,
    Output { dimension: usize },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Input => write!(f, "input"),
            Field::Output { dimension } => write!(f, "output {dimension}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyinfer_math::error::{MatrixError, PolynomialError};

    #[test]
    fn singular_math_errors_become_singular_matrix() {
        let err = InferError::from_math(MatrixError::Singular { size: 3 }.into(), 3);
        assert_eq!(err, InferError::SingularMatrix { samples: 3 });

        let err = InferError::from_math(
            PolynomialError::DuplicateNode {
                first: 0,
                second: 1,
                value: 2.0,
            }
            .into(),
            2,
        );
        assert_eq!(err, InferError::SingularMatrix { samples: 2 });
    }

    #[test]
    fn other_math_errors_are_wrapped() {
        let math = MathError::from(MatrixError::Empty {
            operation: "inversion",
        });
        let err = InferError::from_math(math.clone(), 0);
        assert_eq!(err, InferError::Math(math));
    }

    #[test]
    fn overflow_is_not_reported_as_singular() {
        let math = MathError::from(MatrixError::NonFinite {
            operation: "inversion",
        });
        let err = InferError::from_math(math.clone(), 5);
        assert_eq!(err, InferError::Math(math));
        assert!(!err.to_string().contains("pairwise distinct"));

        let math = MathError::from(PolynomialError::NonFinite);
        assert_eq!(InferError::from_math(math.clone(), 2), InferError::Math(math));
    }

    #[test]
    fn messages_name_the_offending_sample() {
        let err = InferError::from(InputError::NotFinite {
            index: 2,
            field: Field::Output { dimension: 1 },
            value: f64::INFINITY,
        });
        assert_eq!(err.to_string(), "sample 2: output 1 is not finite (inf)");

        let err = InferError::from(InputError::NotNumeric {
            index: 0,
            field: Field::Input,
        });
        assert_eq!(err.to_string(), "sample 0: input is not representable as f64");
    }
}
