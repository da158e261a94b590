use crate::vector::{Vector, VectorCreator, sample_unit_ball};
use rand::RngExt;

/// Produces the initial centroids of a K-Means run.
///
/// `sample(i, max)` returns the `i`th initial centroid, with a length of at most
/// `max`.
pub trait Sampler<V: Vector> {
    fn sample(&mut self, index: usize, max: f64) -> V;
}

impl<V: Vector, F: FnMut(usize, f64) -> V> Sampler<V> for F {
    fn sample(&mut self, index: usize, max: f64) -> V {
        self(index, max)
    }
}

/// Samples vectors uniformly from the unit ball and scales them by `max`.
///
/// Components are drawn from `[0, 1)` and draws outside the ball (or exactly at
/// the origin) are rejected. Fine in 2 or 3 dimensions, but the rejection rate
/// grows quickly with the dimension.
#[derive(Debug)]
pub struct UniformSampler<'a, C, R> {
    creator: C,
    rng: &'a mut R,
}

impl<'a, C: VectorCreator, R: RngExt> UniformSampler<'a, C, R> {
    pub fn new(creator: C, rng: &'a mut R) -> Self {
        Self { creator, rng }
    }
}

impl<C: VectorCreator, R: RngExt> Sampler<C::Vector> for UniformSampler<'_, C, R> {
    fn sample(&mut self, _index: usize, max: f64) -> C::Vector {
        let rng = &mut *self.rng;
        sample_unit_ball(&self.creator, || rng.random::<f64>()).mul_scalar(max)
    }
}
