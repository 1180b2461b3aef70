/// Anything that maps a real input to a real output, such as a polynomial in
/// the power basis or a closure built over one.
pub trait Evaluate {
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluate at every input, preserving order.
    fn batch_evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}
