use polyinfer_math::{traits::Evaluate, Polynomial};
use serde::{Deserialize, Serialize};

use crate::error::InferResult;
use crate::infer::deinterleave;

/// Build a closure evaluating `Σ c_k x^k` over the given coefficients.
///
/// The coefficients are copied into the closure; it holds no reference to
/// the caller's data and can be cloned and shared across threads.
pub fn make_evaluator(
    coefficients: impl Into<Polynomial>,
) -> impl Fn(f64) -> f64 + Clone + Send + Sync + 'static {
    let polynomial = coefficients.into();
    move |x| polynomial.evaluate(x)
}

/// Named, serialisable counterpart of [`make_evaluator`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evaluator {
    polynomial: Polynomial,
}

impl Evaluator {
    pub fn new(coefficients: impl Into<Polynomial>) -> Self {
        Self {
            polynomial: coefficients.into(),
        }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn coefficients(&self) -> &[f64] {
        self.polynomial.coefficients()
    }

    pub fn degree(&self) -> isize {
        self.polynomial.degree()
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x)
    }
}

impl From<Polynomial> for Evaluator {
    fn from(polynomial: Polynomial) -> Self {
        Self { polynomial }
    }
}

/// Evaluates one polynomial per output dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorEvaluator {
    components: Vec<Polynomial>,
}

impl VectorEvaluator {
    pub fn from_components(components: Vec<Polynomial>) -> Self {
        Self { components }
    }

    /// Split a coefficient-major interleaved vector, as produced by
    /// [`infer2d`](crate::infer::infer2d), into its `dimensions` components.
    pub fn from_interleaved(interleaved: &[f64], dimensions: usize) -> InferResult<Self> {
        Ok(Self::from_components(deinterleave(interleaved, dimensions)?))
    }

    pub fn dimensions(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[Polynomial] {
        &self.components
    }

    /// One value per dimension, in dimension order.
    pub fn evaluate(&self, x: f64) -> Vec<f64> {
        self.components.iter().map(|p| p.evaluate(x)).collect()
    }
}
