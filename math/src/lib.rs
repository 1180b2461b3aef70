//! Dense linear algebra and power-basis polynomials over `f64`.

pub mod error;
mod macros;
pub mod matrix;
pub mod poly;
pub mod prelude;
pub mod traits;

pub use error::{MathError, Result};
pub use matrix::Matrix;
pub use poly::Polynomial;
