use super::CONVERGENCE_THRESHOLD;
use crate::clusterer::nearest_centroid;
use crate::dataset::Dataset;
use crate::vector::Vector;
use tracing::{debug, info};

/// Running sum of the vectors assigned to one centroid during a pass.
#[derive(Debug, Clone)]
struct Bucket<V> {
    sum: Option<V>,
    count: usize,
}

impl<V: Vector> Bucket<V> {
    fn new() -> Self {
        Self { sum: None, count: 0 }
    }

    fn collect(&mut self, v: &V) {
        self.sum = Some(match self.sum.take() {
            Some(sum) => sum.add(v),
            None => v.clone(),
        });
        self.count += 1;
    }

    /// The mean of the collected vectors, or `None` if nothing was collected.
    fn average(&self) -> Option<V> {
        let sum = self.sum.as_ref()?;
        Some(sum.mul_scalar(1.0 / self.count as f64))
    }
}

/// Assigns every vector of `dataset` to its nearest centroid.
///
/// `centroids` must not be empty.
fn collect_buckets<V: Vector>(dataset: &Dataset<V>, centroids: &[V]) -> Vec<Bucket<V>> {
    let mut buckets = vec![Bucket::new(); centroids.len()];
    for v in dataset.as_slice() {
        if let Some(i) = nearest_centroid(centroids, v) {
            buckets[i].collect(v);
        }
    }
    buckets
}

#[derive(Debug)]
struct UpdateResult<V> {
    centroids: Vec<V>,
    max_delta: f64,
    empty_buckets: usize,
}

/// Moves each centroid to the mean of its bucket.
///
/// A centroid with an empty bucket stays where it is and counts as not having moved.
fn update_centroids<V: Vector>(centroids: &[V], buckets: &[Bucket<V>]) -> UpdateResult<V> {
    let mut max_delta = 0f64;
    let mut empty_buckets = 0;

    let centroids: Vec<V> = centroids
        .iter()
        .zip(buckets)
        .map(|(old, bucket)| match bucket.average() {
            Some(new) => {
                max_delta = max_delta.max(old.distance_to(&new));
                new
            }
            None => {
                empty_buckets += 1;
                old.clone()
            }
        })
        .collect();

    UpdateResult {
        centroids,
        max_delta,
        empty_buckets,
    }
}

/// Statistics of one refinement run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefinementInfo {
    /// Number of assignment/update passes.
    pub iterations: usize,
    /// The largest centroid movement of each pass, in order.
    pub max_deltas: Vec<f64>,
}

/// Runs Lloyd's algorithm from `centroids` until no centroid moves more than
/// [`CONVERGENCE_THRESHOLD`] in one pass.
///
/// There is no iteration cap. `dataset` and `centroids` must both be non-empty.
pub(super) fn lloyds_loop<V: Vector>(
    dataset: &Dataset<V>,
    mut centroids: Vec<V>,
) -> (Vec<V>, RefinementInfo) {
    assert!(!dataset.is_empty());
    assert!(!centroids.is_empty());

    let mut stats = RefinementInfo::default();
    let mut max_delta = f64::INFINITY;

    while max_delta > CONVERGENCE_THRESHOLD {
        let buckets = collect_buckets(dataset, &centroids);
        let update = update_centroids(&centroids, &buckets);

        centroids = update.centroids;
        max_delta = update.max_delta;
        stats.iterations += 1;
        stats.max_deltas.push(max_delta);

        debug!(
            iteration = stats.iterations,
            max_delta,
            empty_buckets = update.empty_buckets,
            "k-means pass"
        );
    }

    info!(
        k = centroids.len(),
        points = dataset.count(),
        iterations = stats.iterations,
        "k-means converged"
    );

    (centroids, stats)
}
