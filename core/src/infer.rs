//! Public entry points: infer a polynomial from samples.

use num_traits::ToPrimitive;
use polyinfer_math::Polynomial;
use tracing::trace;

use crate::error::{InferResult, InputError};
use crate::params::InferConfig;
use crate::sample::{SampleSet, VectorSampleSet};
use crate::solver::Solver;

/// Infer the coefficients of the polynomial through every `(x, y)` pair,
/// lowest power first.
///
/// ```
/// use polyinfer_core::infer;
///
/// let p = infer([(1, 1), (2, 3)]).unwrap();
/// assert_eq!(p.len(), 2);
/// ```
pub fn infer<I, K, V>(samples: I) -> InferResult<Polynomial>
where
    I: IntoIterator<Item = (K, V)>,
    K: ToPrimitive,
    V: ToPrimitive,
{
    infer_with(samples, &InferConfig::default())
}

/// [`infer`] with an explicit configuration.
pub fn infer_with<I, K, V>(samples: I, config: &InferConfig) -> InferResult<Polynomial>
where
    I: IntoIterator<Item = (K, V)>,
    K: ToPrimitive,
    V: ToPrimitive,
{
    let samples = SampleSet::try_from_pairs(samples)?;
    Solver::new(*config).solve(&samples)
}

/// Infer one polynomial per output dimension and interleave the results
/// coefficient-major: `[c0_d0, c0_d1, .., c1_d0, c1_d1, ..]`.
///
/// The basis is inverted once and reused for every dimension.
pub fn infer2d<I, K, Y, V>(samples: I) -> InferResult<Vec<f64>>
where
    I: IntoIterator<Item = (K, Y)>,
    K: ToPrimitive,
    Y: IntoIterator<Item = V>,
    V: ToPrimitive,
{
    infer2d_with(samples, &InferConfig::default())
}

/// [`infer2d`] with an explicit configuration.
pub fn infer2d_with<I, K, Y, V>(samples: I, config: &InferConfig) -> InferResult<Vec<f64>>
where
    I: IntoIterator<Item = (K, Y)>,
    K: ToPrimitive,
    Y: IntoIterator<Item = V>,
    V: ToPrimitive,
{
    let samples = VectorSampleSet::try_from_rows(samples)?;
    let columns = Solver::new(*config).solve_columns(samples.as_slice())?;
    Ok(interleave(&columns))
}

/// Flatten per-dimension polynomials of equal length, coefficient-major.
pub fn interleave(columns: &[Polynomial]) -> Vec<f64> {
    let len = columns.first().map_or(0, Polynomial::len);
    trace!(dimensions = columns.len(), coefficients = len, "interleaving");
    (0..len)
        .flat_map(|k| columns.iter().map(move |column| column[k]))
        .collect()
}

/// Inverse of [`interleave`]: split into `dimensions` polynomials.
pub fn deinterleave(interleaved: &[f64], dimensions: usize) -> InferResult<Vec<Polynomial>> {
    if dimensions == 0 {
        return Err(InputError::NoDimensions.into());
    }
    if interleaved.len() % dimensions != 0 {
        return Err(InputError::Interleaved {
            len: interleaved.len(),
            dimensions,
        }
        .into());
    }

    Ok((0..dimensions)
        .map(|d| {
            interleaved
                .iter()
                .skip(d)
                .step_by(dimensions)
                .copied()
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use polyinfer_math::poly;

    use super::*;
    use crate::error::InferError;
    use crate::params::SolveStrategy;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    mod infer_tests {
        use super::*;

        #[test]
        fn infers_line_from_integer_pairs() {
            let p = infer([(1, 1), (2, 3)]).unwrap();
            assert_close(p.coefficients(), &[-1.0, 2.0]);
        }

        #[test]
        fn accepts_sample_set_directly() {
            let samples = SampleSet::try_from(vec![(1.0, 1.0), (2.0, 3.0)]).unwrap();
            let by_ref = infer(&samples).unwrap();
            let by_value = infer(samples).unwrap();
            assert_eq!(by_ref, by_value);
        }

        #[test]
        fn lagrange_strategy_agrees() {
            let config = InferConfig::default().with_strategy(SolveStrategy::Lagrange);
            let p = infer_with([(1, 1), (2, 3)], &config).unwrap();
            assert_close(p.coefficients(), &[-1.0, 2.0]);
        }

        #[test]
        fn errors_surface_unchanged() {
            assert_eq!(
                infer(Vec::<(f64, f64)>::new()),
                Err(InferError::EmptyInput)
            );
            assert_eq!(
                infer([(1, 1), (1, 2)]),
                Err(InferError::SingularMatrix { samples: 2 })
            );
            assert!(matches!(
                infer([(1.0, f64::NAN)]),
                Err(InferError::InvalidInput(InputError::NotFinite { index: 0, .. }))
            ));
        }
    }

    mod infer2d_tests {
        use super::*;

        #[test]
        fn interleaves_coefficient_major() {
            let flat = infer2d([(1, [1, 2]), (2, [3, 4])]).unwrap();
            assert_close(&flat, &[-1.0, 0.0, 2.0, 2.0]);
        }

        #[test]
        fn single_dimension_matches_infer() {
            let flat = infer2d([(0.0, [1.0]), (1.0, [3.0]), (2.0, [7.0])]).unwrap();
            let p = infer([(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)]).unwrap();
            assert_close(&flat, p.coefficients());
        }

        #[test]
        fn strategies_agree() {
            let rows = vec![
                (-1.0, vec![2.0, 0.5, 1.0]),
                (0.0, vec![1.0, 1.5, 0.0]),
                (2.0, vec![5.0, -3.0, 4.0]),
            ];
            let inverse = infer2d(rows.clone()).unwrap();
            let config = InferConfig::default().with_strategy(SolveStrategy::Lagrange);
            let lagrange = infer2d_with(rows, &config).unwrap();
            assert_close(&inverse, &lagrange);
        }

        #[test]
        fn errors_surface_unchanged() {
            assert_eq!(
                infer2d(Vec::<(f64, Vec<f64>)>::new()),
                Err(InferError::EmptyInput)
            );
            assert_eq!(
                infer2d([(2, [1, 2]), (2, [3, 4])]),
                Err(InferError::SingularMatrix { samples: 2 })
            );
            assert_eq!(
                infer2d(vec![(1, vec![1]), (2, vec![3, 4])]),
                Err(InferError::InvalidInput(InputError::DimensionMismatch {
                    index: 1,
                    expected: 1,
                    found: 2
                }))
            );
        }
    }

    mod interleave_tests {
        use super::*;

        #[test]
        fn interleave_then_deinterleave() {
            let columns = vec![poly![-1, 2], poly![0, 2]];
            let flat = interleave(&columns);
            assert_eq!(flat, vec![-1.0, 0.0, 2.0, 2.0]);
            assert_eq!(deinterleave(&flat, 2).unwrap(), columns);
        }

        #[test]
        fn interleave_of_nothing_is_empty() {
            assert!(interleave(&[]).is_empty());
        }

        #[test]
        fn deinterleave_validates_dimensions() {
            assert_eq!(
                deinterleave(&[1.0], 0),
                Err(InferError::InvalidInput(InputError::NoDimensions))
            );
            assert_eq!(
                deinterleave(&[1.0, 2.0, 3.0], 2),
                Err(InferError::InvalidInput(InputError::Interleaved {
                    len: 3,
                    dimensions: 2
                }))
            );
        }
    }
}
