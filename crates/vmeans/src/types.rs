use crate::vector::{Vector, VectorCreator};
use std::ops::Index;

/// A real vector with `D` components, stored inline.
///
/// `D` must be positive: the zero-dimensional space has no unit vectors, so
/// normalization and sampling would never terminate. Creating a `VectorN<0>`
/// through [`VectorNCreator`] fails to compile.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VectorN<const D: usize>(pub [f64; D]);

/// A real vector with 2 components.
pub type Vector2 = VectorN<2>;

/// Creates a 2-dimensional vector with the given components.
pub fn vector2d(x: f64, y: f64) -> Vector2 {
    VectorN([x, y])
}

impl<const D: usize> VectorN<D> {
    pub fn components(&self) -> &[f64; D] {
        &self.0
    }

    #[inline(always)]
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        VectorN(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<const D: usize> From<[f64; D]> for VectorN<D> {
    fn from(components: [f64; D]) -> Self {
        VectorN(components)
    }
}

impl<const D: usize> Index<usize> for VectorN<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// The [`VectorCreator`] of `VectorN<D>`. It carries no state.
///
/// ```compile_fail
/// use vmeans::{VectorCreator, VectorNCreator};
///
/// let empty = VectorNCreator::<0>.null();
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct VectorNCreator<const D: usize>;

impl<const D: usize> VectorCreator for VectorNCreator<D> {
    type Vector = VectorN<D>;

    fn create(&self, f: impl FnMut(usize) -> f64) -> VectorN<D> {
        const { assert!(D > 0, "VectorN needs at least one component") }
        VectorN(std::array::from_fn(f))
    }

    fn null(&self) -> VectorN<D> {
        const { assert!(D > 0, "VectorN needs at least one component") }
        VectorN([0.0; D])
    }
}

impl<const D: usize> Vector for VectorN<D> {
    type Creator = VectorNCreator<D>;

    fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    fn subtract(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    fn mul_scalar(&self, scalar: f64) -> Self {
        VectorN(self.0.map(|c| c * scalar))
    }

    fn transposed_mul(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0.0, |acc, (&a, &b)| a.mul_add(b, acc))
    }

    fn max_abs_component(&self) -> f64 {
        self.0
            .iter()
            .try_fold(0f64, |max, &c| (!c.is_nan()).then(|| max.max(c.abs())))
            .unwrap_or(f64::NAN)
    }

    fn creator(&self) -> VectorNCreator<D> {
        VectorNCreator
    }
}
