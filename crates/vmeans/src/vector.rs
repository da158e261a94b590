use rand::RngExt;
use std::fmt::Debug;

// 2^600, exact and large enough to lift any subnormal into the normal range
const SUBNORMAL_SCALE: f64 = f64::from_bits((1023 + 600) << 52);

/// Creates vectors of one real abstract vector space.
///
/// A creator exists separately from [`Vector`] because algorithms need to build
/// vectors (null vectors, random samples) before they hold any vector of the space.
pub trait VectorCreator: Clone + Debug {
    type Vector: Vector;

    /// Builds a vector whose `i`th component is `f(i)`.
    ///
    /// `f` is called once for each index in `0..dimension`, in order. Indices past
    /// the dimension of the space are never requested.
    fn create(&self, f: impl FnMut(usize) -> f64) -> Self::Vector;

    /// The null vector of this space.
    fn null(&self) -> Self::Vector;
}

/// An element of a real abstract vector space of fixed dimensionality.
///
/// Every operation returns a new vector. Binary operations only accept vectors of
/// the same type, so mixing spaces is rejected by the compiler.
pub trait Vector: Clone + Debug {
    type Creator: VectorCreator<Vector = Self>;

    /// Component-wise addition.
    fn add(&self, other: &Self) -> Self;

    /// `self - other`.
    fn subtract(&self, other: &Self) -> Self;

    fn mul_scalar(&self, scalar: f64) -> Self;

    /// The transpose of `self` multiplied with `other`, i.e. the inner product.
    fn transposed_mul(&self, other: &Self) -> f64;

    /// The squared Euclidean norm.
    ///
    /// All nearest-centroid and convergence comparisons in this crate are made on
    /// this quantity. It orders vectors the same way the true norm does.
    fn length(&self) -> f64 {
        self.transposed_mul(self)
    }

    /// The largest absolute value among the components. NaN if any component is NaN.
    fn max_abs_component(&self) -> f64;

    /// The vector with the same direction and a length of 1.
    ///
    /// The null vector has no direction, so a uniformly random unit vector drawn
    /// from `rng` is returned instead. Any other finite vector keeps its direction,
    /// however large or small its components are.
    fn normalize(&self, rng: &mut impl RngExt) -> Self {
        let mut max = self.max_abs_component();
        if max == 0.0 {
            let direction = sample_unit_ball(&self.creator(), || rng.random_range(-1.0..1.0));
            return direction.normalize(rng);
        }

        // Bring the largest component to 1 first, so that squaring neither
        // overflows nor underflows. 1 / max overflows for subnormal max.
        let mut v = self.clone();
        if max < f64::MIN_POSITIVE {
            v = v.mul_scalar(SUBNORMAL_SCALE);
            max = v.max_abs_component();
        }
        let v = v.mul_scalar(1.0 / max);
        v.mul_scalar(1.0 / v.length().sqrt())
    }

    /// The [`length`](Vector::length) of `self - other`.
    fn distance_to(&self, other: &Self) -> f64 {
        self.subtract(other).length()
    }

    fn creator(&self) -> Self::Creator;
}

/// Rejection-samples a non-null vector inside the closed unit ball.
///
/// Components are drawn independently from `component`. The acceptance rate falls
/// quickly with the dimension: in 10 dimensions with components in `[0, 1)` fewer
/// than one draw in 1000 is accepted.
pub(crate) fn sample_unit_ball<C: VectorCreator>(
    creator: &C,
    mut component: impl FnMut() -> f64,
) -> C::Vector {
    loop {
        let v = creator.create(|_| component());
        let length = v.length();
        if length > 0.0 && length <= 1.0 {
            return v;
        }
    }
}
