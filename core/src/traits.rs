/// Abstract source of one interpolation constraint: an input coordinate and
/// the output value for each dimension at that coordinate.
pub trait PointSource {
    /// The x-coordinate of this point.
    fn x(&self) -> f64;

    /// Output values, one per dimension.
    fn outputs(&self) -> &[f64];

    /// Number of output dimensions carried by this point.
    fn dimensions(&self) -> usize {
        self.outputs().len()
    }

    /// Output for one dimension, if present.
    fn output_at(&self, dimension: usize) -> Option<f64> {
        self.outputs().get(dimension).copied()
    }
}
