//! Real polynomials in the power basis.
//!
//! Coefficients are stored in ascending order: index `k` holds the
//! coefficient of `x^k`. Trailing zeros are kept as given, so a polynomial
//! built from `N` coefficients always reports `len() == N`.

use std::fmt;
use std::ops::Index;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{PolynomialError, Result};
use crate::traits::Evaluate;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// The polynomial with no coefficients. Evaluates to zero everywhere.
    pub fn zero() -> Self {
        Self::default()
    }


    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    /// Number of stored coefficients, including trailing zeros.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Index of the highest non-zero coefficient, `-1` for the zero polynomial.
    pub fn degree(&self) -> isize {
        self.coefficients
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(-1, |i| i as isize)
    }

    /// Multiply every coefficient by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        self.coefficients.iter().map(|c| c * factor).collect()
    }

    /// The monic polynomial `Π (x - node)` vanishing on every node.
    pub fn zerofier(nodes: &[f64]) -> Self {
        let mut coefficients = Vec::with_capacity(nodes.len() + 1);
        coefficients.push(1.0);
        for &node in nodes {
            coefficients.push(0.0);
            for k in (0..coefficients.len()).rev() {
                let shifted = if k > 0 { coefficients[k - 1] } else { 0.0 };
                coefficients[k] = shifted - node * coefficients[k];
            }
        }
        Self::new(coefficients)
    }

    /// Quotient of synthetic division by `(x - root)`; the remainder is dropped.
    pub fn divide_by_root(&self, root: f64) -> Self {
        let n = self.len();
        if n <= 1 {
            return Self::zero();
        }
        let mut quotient = vec![0.0; n - 1];
        let mut carry = 0.0;
        for k in (1..n).rev() {
            carry = self.coefficients[k] + root * carry;
            quotient[k - 1] = carry;
        }
        Self::new(quotient)
    }

    /// Lagrange interpolation through `(xs[i], ys[i])`, expanded into the
    /// power basis. The result has exactly `xs.len()` coefficients.
    ///
    /// Fails with [`PolynomialError::NonFinite`] when an intermediate
    /// product leaves the `f64` range.
    pub fn lagrange_interpolate(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PolynomialError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            }
            .into());
        }
        ensure_distinct_nodes(xs)?;

        let n = xs.len();
        let full = Self::zerofier(xs);
        let mut coefficients = vec![0.0; n];

        for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
            let denominator: f64 = xs
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| xi - xj)
                .product();
            let term = full.divide_by_root(xi).scale(yi / denominator);
            for (acc, c) in coefficients.iter_mut().zip(term.coefficients()) {
                *acc += c;
            }
        }

        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PolynomialError::NonFinite.into());
        }
        Ok(Self::new(coefficients))
    }
}

fn ensure_distinct_nodes(xs: &[f64]) -> Result<(), PolynomialError> {
    for (first, a) in xs.iter().enumerate() {
        if let Some(offset) = xs[first + 1..].iter().position(|b| b == a) {
            return Err(PolynomialError::DuplicateNode {
                first,
                second: first + 1 + offset,
                value: *a,
            });
        }
    }
    Ok(())
}

impl Evaluate for Polynomial {
    /// Horner evaluation of `Σ c_k x^k`.
    fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(poly: Polynomial) -> Self {
        poly.into_coefficients()
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coefficients[i]
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero());

        let Some(first) = terms.next() else {
            return write!(f, "0");
        };
        write_term(f, first)?;
        for term in terms {
            write!(f, " + ")?;
            write_term(f, term)?;
        }
        Ok(())
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, (power, c): (usize, &f64)) -> fmt::Result {
    match power {
        0 => write!(f, "{c}"),
        1 => write!(f, "{c}x"),
        _ => write!(f, "{c}x^{power}"),
    }
}
