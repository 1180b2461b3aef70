pub use crate::poly;
pub use crate::{
    error::{MathError, MatrixError, PolynomialError},
    matrix::Matrix,
    poly::Polynomial,
    traits::Evaluate,
};
