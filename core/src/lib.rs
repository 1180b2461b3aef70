//! Exact polynomial inference from sample points.
//!
//! Given `N` samples with distinct inputs, [`infer`] returns the `N`
//! power-basis coefficients of the unique polynomial of degree `< N` passing
//! through all of them. [`infer2d`] does the same for vector-valued outputs,
//! and [`make_evaluator`] turns coefficients back into a callable.

pub mod error;
pub mod evaluator;
pub mod infer;
pub mod params;
pub mod sample;
pub mod solver;
pub mod traits;

pub use error::{InferError, InferResult, InputError};
pub use evaluator::{make_evaluator, Evaluator, VectorEvaluator};
pub use infer::{deinterleave, infer, infer2d, infer2d_with, infer_with};
pub use params::{InferConfig, SolveStrategy};
pub use sample::{SampleSet, VectorSampleSet};
pub use polyinfer_math::{traits::Evaluate, Polynomial};
