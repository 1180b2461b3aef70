//! The linear solver behind inference.
//!
//! For `N` samples the solver builds the `N x N` power basis
//!
//! ```text
//! ( x_0^0  x_0^1  ...  x_0^(N-1) )
//! ( x_1^0  x_1^1  ...  x_1^(N-1) )
//! (  ...                         )
//! ```
//!
//! and solves `Basis . Coefficients = Outputs`. With the default strategy the
//! basis is inverted once and multiplied by the output column (or by every
//! output column, for vector samples).

use polyinfer_math::{Matrix, MathError, Polynomial};
use tracing::{debug, warn};

use crate::error::{InferError, InferResult, InputError};
use crate::params::{InferConfig, SolveStrategy};
use crate::sample::SampleSet;
use crate::traits::PointSource;

/// Square power basis for `nodes`: entry `(i, k)` is `nodes[i]^k`.
pub fn basis_matrix(nodes: &[f64]) -> Matrix {
    Matrix::vandermonde(nodes, nodes.len())
}

/// Stateless solver parameterised by an [`InferConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    config: InferConfig,
}

impl Solver {
    pub const fn new(config: InferConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &InferConfig {
        &self.config
    }

    /// Coefficients of the unique polynomial of degree `< N` through the
    /// `N` samples. The result always holds exactly `N` coefficients.
    pub fn solve(&self, samples: &SampleSet) -> InferResult<Polynomial> {
        let n = samples.len();
        self.config.check_sample_count(n)?;
        debug!(samples = n, strategy = %self.config.strategy(), "solving for coefficients");

        let xs = samples.inputs();
        let ys = samples.outputs();

        match self.config.strategy() {
            SolveStrategy::Inverse => {
                let inverse = invert_basis(&xs)?;
                let coefficients = inverse
                    .try_mul_vector(&ys)
                    .map_err(|err| lift(err, n))?;
                Ok(Polynomial::from(coefficients))
            }
            SolveStrategy::Lagrange => lagrange(&xs, &ys),
        }
    }

    /// Solve one system per output dimension, sharing a single basis
    /// inversion. Returns one polynomial per dimension, in dimension order.
    pub fn solve_columns<S: PointSource>(&self, points: &[S]) -> InferResult<Vec<Polynomial>> {
        let n = points.len();
        self.config.check_sample_count(n)?;
        let dimensions = ensure_consistent_dimensions(points)?;
        debug!(
            samples = n,
            dimensions,
            strategy = %self.config.strategy(),
            "solving for coefficient columns"
        );

        let xs: Vec<f64> = points.iter().map(PointSource::x).collect();

        match self.config.strategy() {
            SolveStrategy::Inverse => {
                let inverse = invert_basis(&xs)?;
                let outputs = Matrix::try_new(
                    points.iter().map(|p| p.outputs().to_vec()).collect(),
                )
                .map_err(|err| InferError::from_math(err, n))?;
                let solved = inverse.try_mul(&outputs).map_err(|err| lift(err, n))?;
                Ok(solved.columns().into_iter().map(Polynomial::from).collect())
            }
            SolveStrategy::Lagrange => (0..dimensions)
                .map(|dimension| {
                    let ys: Vec<f64> = points
                        .iter()
                        .map(|p| p.outputs()[dimension])
                        .collect();
                    lagrange(&xs, &ys)
                })
                .collect(),
        }
    }
}

fn invert_basis(xs: &[f64]) -> InferResult<Matrix> {
    basis_matrix(xs).try_inverse().map_err(|err| lift(err, xs.len()))
}

fn lagrange(xs: &[f64], ys: &[f64]) -> InferResult<Polynomial> {
    Polynomial::lagrange_interpolate(xs, ys).map_err(|err| lift(err, xs.len()))
}

/// Map a numeric failure on a `samples`-row system, logging the two
/// failures a caller can act on.
fn lift(err: MathError, samples: usize) -> InferError {
    if err.is_singular() {
        warn!(samples, "basis is singular: input coordinates repeat");
    } else if err.is_non_finite() {
        warn!(samples, %err, "solve left the f64 range");
    }
    InferError::from_math(err, samples)
}

/// Validate that all points expose the same, non-zero dimension count.
fn ensure_consistent_dimensions<S: PointSource>(points: &[S]) -> Result<usize, InputError> {
    let Some(first) = points.first() else {
        return Ok(0);
    };

    let expected = first.dimensions();
    if expected == 0 {
        return Err(InputError::NoDimensions);
    }
    if let Some((index, point)) = points
        .iter()
        .enumerate()
        .find(|(_, point)| point.dimensions() != expected)
    {
        return Err(InputError::DimensionMismatch {
            index,
            expected,
            found: point.dimensions(),
        });
    }

    Ok(expected)
}
