use crate::clusterer::CentroidClusterer;
use crate::dataset::Dataset;
use crate::vector::Vector;
use rand::RngExt;
use tracing::warn;

pub mod lloyds;
pub mod sampler;

pub use lloyds::RefinementInfo;
pub use sampler::{Sampler, UniformSampler};

// References:
// - Least squares quantization in PCM (S. Lloyd)
//   https://doi.org/10.1109/TIT.1982.1056489
//
// Observations:
// - The threshold is compared against `Vector::length`, which is the squared norm,
//   so centroids stop once none of them moved further than sqrt(0.1) ≈ 0.316.
// - There is no iteration cap and nothing reseeds empty clusters.

/// Refinement stops after a pass in which no centroid moved more than this.
pub const CONVERGENCE_THRESHOLD: f64 = 0.1;

/// K-Means with `k` initial centroids drawn by a [`UniformSampler`] from `rng`.
///
/// The samples are scaled by the length of the longest vector in `dataset`.
pub fn k_means<V: Vector>(
    rng: &mut impl RngExt,
    dataset: &Dataset<V>,
    k: usize,
) -> CentroidClusterer<V> {
    if dataset.is_empty() {
        return CentroidClusterer::empty();
    }
    let sampler = UniformSampler::new(dataset.creator().clone(), rng);
    k_means_with_sampler(dataset, k, sampler)
}

/// K-Means with the initial centroids `sampler.sample(0, max)` to
/// `sampler.sample(k - 1, max)`, where `max` is the length of the longest vector
/// in `dataset`.
pub fn k_means_with_sampler<V: Vector>(
    dataset: &Dataset<V>,
    k: usize,
    mut sampler: impl Sampler<V>,
) -> CentroidClusterer<V> {
    if dataset.is_empty() {
        return CentroidClusterer::empty();
    }
    let max = dataset.max().length();
    let centroids = (0..k).map(|i| sampler.sample(i, max)).collect();
    k_means_with_centroids(dataset, centroids)
}

/// K-Means starting from the given centroids. `k` is the number of centroids.
pub fn k_means_with_centroids<V: Vector>(
    dataset: &Dataset<V>,
    centroids: Vec<V>,
) -> CentroidClusterer<V> {
    k_means_with_centroids_debug(dataset, centroids).0
}

/// Same as [`k_means_with_centroids`], but also reports how the refinement went.
pub fn k_means_with_centroids_debug<V: Vector>(
    dataset: &Dataset<V>,
    centroids: Vec<V>,
) -> (CentroidClusterer<V>, RefinementInfo) {
    if dataset.is_empty() {
        return (CentroidClusterer::empty(), RefinementInfo::default());
    }
    if centroids.is_empty() {
        warn!(
            points = dataset.count(),
            "k-means without centroids, returning an empty clusterer"
        );
        return (CentroidClusterer::empty(), RefinementInfo::default());
    }

    let (centroids, info) = lloyds::lloyds_loop(dataset, centroids);
    (CentroidClusterer::new(centroids), info)
}
