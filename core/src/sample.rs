//! Sample sets: the ordered (input, output) constraints an interpolant must
//! satisfy.
//!
//! Callers hand in any iterator of pairs whose components implement
//! [`ToPrimitive`]. Iteration order is preserved and fixes the row order of
//! the basis matrix. Duplicate inputs are kept as given; they surface later as
//! a singular basis.

use num_traits::ToPrimitive;
use polyinfer_math::traits::Evaluate;
use serde::{Deserialize, Serialize};

use crate::error::{Field, InputError};
use crate::traits::PointSource;

/// A single scalar constraint `p(x) = y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl PointSource for Sample {
    fn x(&self) -> f64 {
        self.x
    }

    fn outputs(&self) -> &[f64] {
        std::slice::from_ref(&self.y)
    }
}

/// Ordered scalar samples.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Coerce `(input, output)` pairs into a sample set.
    ///
    /// Fails on the first component that cannot be represented as a finite
    /// `f64`.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToPrimitive,
        V: ToPrimitive,
    {
        let samples = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (x, y))| {
                Ok(Sample {
                    x: coerce(index, Field::Input, x)?,
                    y: coerce(index, Field::Output { dimension: 0 }, y)?,
                })
            })
            .collect::<Result<Vec<_>, InputError>>()?;
        Ok(Self { samples })
    }

    /// Sample `f` at each of `xs`, in order.
    pub fn from_evaluations<F>(f: &F, xs: &[f64]) -> Result<Self, InputError>
    where
        F: Evaluate + ?Sized,
    {
        Self::try_from_pairs(xs.iter().map(|&x| (x, f.evaluate(x))))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Input coordinates in row order.
    pub fn inputs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Output values in row order.
    pub fn outputs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }
}

fn sample_as_pair(sample: &Sample) -> (f64, f64) {
    (sample.x, sample.y)
}

fn owned_sample_as_pair(sample: Sample) -> (f64, f64) {
    (sample.x, sample.y)
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = (f64, f64);
    type IntoIter =
        std::iter::Map<std::slice::Iter<'a, Sample>, fn(&Sample) -> (f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter().map(sample_as_pair as fn(&Sample) -> (f64, f64))
    }
}

impl IntoIterator for SampleSet {
    type Item = (f64, f64);
    type IntoIter = std::iter::Map<std::vec::IntoIter<Sample>, fn(Sample) -> (f64, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples
            .into_iter()
            .map(owned_sample_as_pair as fn(Sample) -> (f64, f64))
    }
}

impl TryFrom<Vec<(f64, f64)>> for SampleSet {
    type Error = InputError;

    fn try_from(value: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(value)
    }
}

impl TryFrom<&[(f64, f64)]> for SampleSet {
    type Error = InputError;

    fn try_from(value: &[(f64, f64)]) -> Result<Self, Self::Error> {
        Self::try_from_pairs(value.iter().copied())
    }
}

/// A constraint with one output per dimension: `p_d(x) = outputs[d]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorSample {
    pub x: f64,
    pub outputs: Vec<f64>,
}

impl PointSource for VectorSample {
    fn x(&self) -> f64 {
        self.x
    }

    fn outputs(&self) -> &[f64] {
        &self.outputs
    }
}

/// Ordered vector-valued samples sharing one output dimension count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorSampleSet {
    samples: Vec<VectorSample>,
    dimensions: usize,
}

impl VectorSampleSet {
    /// Coerce `(input, outputs)` rows into a vector sample set.
    ///
    /// Every row must carry the same, non-zero number of outputs.
    pub fn try_from_rows<I, K, Y, V>(rows: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (K, Y)>,
        K: ToPrimitive,
        Y: IntoIterator<Item = V>,
        V: ToPrimitive,
    {
        let mut samples = Vec::new();
        let mut dimensions = None;

        for (index, (x, ys)) in rows.into_iter().enumerate() {
            let x = coerce(index, Field::Input, x)?;
            let outputs = ys
                .into_iter()
                .enumerate()
                .map(|(dimension, y)| coerce(index, Field::Output { dimension }, y))
                .collect::<Result<Vec<_>, InputError>>()?;

            let expected = *dimensions.get_or_insert(outputs.len());
            if expected == 0 {
                return Err(InputError::NoDimensions);
            }
            if outputs.len() != expected {
                return Err(InputError::DimensionMismatch {
                    index,
                    expected,
                    found: outputs.len(),
                });
            }
            samples.push(VectorSample { x, outputs });
        }

        Ok(Self {
            samples,
            dimensions: dimensions.unwrap_or(0),
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Output dimension count, zero for an empty set.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn as_slice(&self) -> &[VectorSample] {
        &self.samples
    }
}

fn coerce<T: ToPrimitive>(index: usize, field: Field, value: T) -> Result<f64, InputError> {
    let value = value
        .to_f64()
        .ok_or(InputError::NotNumeric { index, field })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite {
            index,
            field,
            value,
        })
    }
}
