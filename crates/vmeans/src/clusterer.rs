use crate::dataset::Dataset;
use crate::vector::Vector;
use crate::{ClusterError, EmptyClustererSnafu};
use snafu::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one cluster of a clusterer.
///
/// Clusters are numbered densely from 0. A `Cluster` is only meaningful for the
/// clusterer that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cluster(usize);

impl Cluster {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Cluster {
    fn from(index: usize) -> Self {
        Cluster(index)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster {}", self.0)
    }
}

/// A clusterer that assigns every vector to exactly one cluster.
pub trait FlatClusterer<V: Vector> {
    /// The cluster `v` belongs to.
    fn find_cluster(&self, v: &V) -> Result<Cluster, ClusterError>;

    /// All clusters of this clusterer, in ascending order.
    fn clusters(&self) -> Vec<Cluster>;

    /// Splits `dataset` by cluster.
    ///
    /// Every vector of the dataset ends up in exactly one of the returned lists, and
    /// vectors sharing a cluster keep their relative order. Clusters that receive no
    /// vectors are left out of the map.
    fn clustered_partition<'d>(
        &self,
        dataset: &'d Dataset<V>,
    ) -> Result<BTreeMap<Cluster, Vec<&'d V>>, ClusterError> {
        let mut partition: BTreeMap<Cluster, Vec<&'d V>> = BTreeMap::new();
        for v in dataset.as_slice() {
            let cluster = self.find_cluster(v)?;
            partition.entry(cluster).or_default().push(v);
        }
        Ok(partition)
    }
}

/// Assigns a vector to the cluster whose centroid is nearest to it.
///
/// The cluster of a centroid is its position in the centroid list. Centroids do
/// not have to be distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidClusterer<V: Vector> {
    centroids: Vec<V>,
}

impl<V: Vector> CentroidClusterer<V> {
    pub fn new(centroids: Vec<V>) -> Self {
        Self { centroids }
    }

    /// A clusterer without centroids. Every lookup on it fails.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The centroids, indexed by [`Cluster::index`].
    pub fn centroids(&self) -> &[V] {
        &self.centroids
    }

    pub fn centroid_of(&self, cluster: Cluster) -> Option<&V> {
        self.centroids.get(cluster.0)
    }

    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    pub fn into_centroids(self) -> Vec<V> {
        self.centroids
    }
}

/// Index of the centroid nearest to `v`, or `None` when there are no centroids.
///
/// Only a strictly smaller distance replaces the current best, so ties go to the
/// lowest index.
#[inline]
pub(crate) fn nearest_centroid<V: Vector>(centroids: &[V], v: &V) -> Option<usize> {
    let mut centroids = centroids.iter().enumerate();
    let (mut best, first) = centroids.next()?;
    let mut best_distance = first.distance_to(v);
    for (i, centroid) in centroids {
        let d = centroid.distance_to(v);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    Some(best)
}

impl<V: Vector> FlatClusterer<V> for CentroidClusterer<V> {
    fn find_cluster(&self, v: &V) -> Result<Cluster, ClusterError> {
        let index = nearest_centroid(&self.centroids, v).context(EmptyClustererSnafu)?;
        Ok(Cluster(index))
    }

    fn clusters(&self) -> Vec<Cluster> {
        (0..self.centroids.len()).map(Cluster).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Vector2, VectorN, VectorNCreator, vector2d};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn three_centroids() -> CentroidClusterer<Vector2> {
        CentroidClusterer::new(vec![
            vector2d(0.0, 0.0),
            vector2d(10.0, 0.0),
            vector2d(0.0, 10.0),
        ])
    }

    #[test]
    fn clusters_are_dense_and_ascending() {
        let clusterer = three_centroids();
        let clusters = clusterer.clusters();
        assert_eq!(clusters, vec![Cluster(0), Cluster(1), Cluster(2)]);
        for c in clusters {
            assert_eq!(clusterer.centroid_of(c), clusterer.centroids().get(c.index()));
        }
        assert_eq!(clusterer.centroid_of(Cluster(3)), None);
    }

    #[test]
    fn find_cluster_picks_nearest() {
        let clusterer = three_centroids();
        assert_eq!(clusterer.find_cluster(&vector2d(1.0, 1.0)).unwrap(), Cluster(0));
        assert_eq!(clusterer.find_cluster(&vector2d(9.0, 2.0)).unwrap(), Cluster(1));
        assert_eq!(clusterer.find_cluster(&vector2d(-1.0, 7.0)).unwrap(), Cluster(2));
    }

    #[test]
    fn find_cluster_tie_goes_to_lowest_index() {
        let clusterer = three_centroids();
        // Equidistant to clusters 1 and 2
        assert_eq!(clusterer.find_cluster(&vector2d(10.0, 10.0)).unwrap(), Cluster(1));

        // Duplicate centroids
        let clusterer = CentroidClusterer::new(vec![
            vector2d(5.0, 5.0),
            vector2d(1.0, 1.0),
            vector2d(1.0, 1.0),
        ]);
        assert_eq!(clusterer.find_cluster(&vector2d(1.0, 1.0)).unwrap(), Cluster(1));
    }

    #[test]
    fn empty_clusterer_fails_lookups() {
        let clusterer = CentroidClusterer::<Vector2>::empty();
        assert!(clusterer.is_empty());
        assert!(clusterer.clusters().is_empty());
        for v in [vector2d(0.0, 0.0), vector2d(1.0, -1.0), vector2d(1e9, 1e9)] {
            assert!(matches!(
                clusterer.find_cluster(&v),
                Err(ClusterError::EmptyClusterer)
            ));
        }

        let dataset = Dataset::from_vectors(vec![vector2d(1.0, 1.0)]).unwrap();
        assert!(matches!(
            clusterer.clustered_partition(&dataset),
            Err(ClusterError::EmptyClusterer)
        ));
    }

    #[test]
    fn partition_of_empty_dataset_is_empty() {
        let dataset: Dataset<Vector2> = Dataset::new(vec![], VectorNCreator);
        let partition = three_centroids().clustered_partition(&dataset).unwrap();
        assert!(partition.is_empty());
    }

    #[test]
    fn partition_covers_dataset() {
        let data = vec![
            vector2d(0.5, 0.0),
            vector2d(9.0, 1.0),
            vector2d(-0.5, 0.5),
            vector2d(0.0, 11.0),
            vector2d(11.0, -1.0),
            vector2d(0.1, 0.1),
        ];
        let dataset = Dataset::from_vectors(data.clone()).unwrap();
        let partition = three_centroids().clustered_partition(&dataset).unwrap();

        assert_eq!(partition[&Cluster(0)], vec![&data[0], &data[2], &data[5]]);
        assert_eq!(partition[&Cluster(1)], vec![&data[1], &data[4]]);
        assert_eq!(partition[&Cluster(2)], vec![&data[3]]);

        let total: usize = partition.values().map(Vec::len).sum();
        assert_eq!(total, dataset.count());
    }

    #[test]
    fn partition_skips_clusters_without_vectors() {
        let dataset = Dataset::from_vectors(vec![vector2d(0.0, 9.0)]).unwrap();
        let partition = three_centroids().clustered_partition(&dataset).unwrap();
        assert_eq!(partition.keys().copied().collect::<Vec<_>>(), vec![Cluster(2)]);
    }

    #[test]
    fn cluster_display() {
        assert_eq!(Cluster::from(4).to_string(), "cluster 4");
    }

    fn point() -> impl Strategy<Value = Vector2> {
        prop::array::uniform2(-100f64..100.0).prop_map(VectorN)
    }

    /// Points on a coarse grid, so that ties between centroids actually happen.
    fn grid_point() -> impl Strategy<Value = Vector2> {
        prop::array::uniform2((-5i32..5).prop_map(f64::from)).prop_map(VectorN)
    }

    proptest! {
        #[test]
        fn prop_clusters_are_dense(centroids in prop::collection::vec(point(), 0..20)) {
            let n = centroids.len();
            let clusterer = CentroidClusterer::new(centroids);
            prop_assert_eq!(clusterer.clusters(), (0..n).map(Cluster).collect::<Vec<_>>());
            for c in clusterer.clusters() {
                prop_assert!(clusterer.centroid_of(c).is_some());
            }
            prop_assert!(clusterer.centroid_of(Cluster(n)).is_none());
        }

        #[test]
        fn prop_find_cluster_is_nearest_lowest_index(
            v in grid_point(),
            centroids in prop::collection::vec(grid_point(), 1..10),
        ) {
            let clusterer = CentroidClusterer::new(centroids.clone());
            let found = clusterer.find_cluster(&v).unwrap().index();
            let best = centroids[found].distance_to(&v);
            for (i, c) in centroids.iter().enumerate() {
                let d = c.distance_to(&v);
                prop_assert!(d >= best);
                if i < found {
                    prop_assert!(d > best, "centroid {} ties with {} but comes first", i, found);
                }
            }
        }

        #[test]
        fn prop_partition_is_a_partition(
            data in prop::collection::vec(grid_point(), 0..60),
            centroids in prop::collection::vec(grid_point(), 1..8),
        ) {
            let dataset = Dataset::new(data.clone(), VectorNCreator);
            let clusterer = CentroidClusterer::new(centroids);
            let partition = clusterer.clustered_partition(&dataset).unwrap();

            let total: usize = partition.values().map(Vec::len).sum();
            prop_assert_eq!(total, data.len());

            for (cluster, members) in &partition {
                prop_assert!(!members.is_empty());
                prop_assert!(cluster.index() < clusterer.len());
                // Exactly the dataset vectors of this cluster, in dataset order
                let expected: Vec<&Vector2> = dataset
                    .as_slice()
                    .iter()
                    .filter(|v| clusterer.find_cluster(v).unwrap() == *cluster)
                    .collect();
                prop_assert_eq!(members, &expected);
            }
        }

        #[test]
        fn prop_empty_clusterer_rejects_everything(v in point()) {
            let clusterer = CentroidClusterer::<Vector2>::empty();
            prop_assert!(matches!(clusterer.find_cluster(&v), Err(ClusterError::EmptyClusterer)));
        }
    }
}
