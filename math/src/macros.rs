//! Shared macros for constructing core math primitives.

/// Construct a [`Polynomial`](crate::poly::Polynomial) from coefficients,
/// lowest power first. Integer literals are widened to `f64`.
///
/// ```
/// use polyinfer_math::prelude::*;
///
/// let p = poly![4, 3, 2, 1];
/// assert_eq!(p.coefficients(), &[4.0, 3.0, 2.0, 1.0]);
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::poly::Polynomial::zero()
    }};
    ($val:expr; $count:expr) => {{
        let value = f64::from($val);
        $crate::poly::Polynomial::from(vec![value; $count])
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::from(vec![$(f64::from($coeff)),+])
    }};
}
