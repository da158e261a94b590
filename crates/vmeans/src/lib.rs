//! K-Means clustering over abstract real vector spaces.
//!
//! The clustering code only talks to vectors through the [`Vector`] and
//! [`VectorCreator`] traits, so any fixed-dimension vector type can be clustered.
//! [`VectorN`] is provided for plain `f64` arrays.
//!
//! ```
//! use vmeans::{Cluster, Dataset, FlatClusterer, kmeans, vector2d};
//!
//! let dataset = Dataset::from_vectors(vec![
//!     vector2d(0.0, 0.0),
//!     vector2d(0.1, 0.1),
//!     vector2d(10.0, 10.0),
//!     vector2d(10.1, 9.9),
//! ])
//! .unwrap();
//!
//! let clusterer =
//!     kmeans::k_means_with_centroids(&dataset, vec![vector2d(0.0, 0.0), vector2d(10.0, 10.0)]);
//!
//! let partition = clusterer.clustered_partition(&dataset).unwrap();
//! assert_eq!(partition[&Cluster::from(0)].len(), 2);
//! assert_eq!(partition[&Cluster::from(1)].len(), 2);
//! ```
//!
//! Random choices (initial centroids, normalizing the null vector) always go
//! through a caller-supplied generator. [`rng::new`] gives a seeded one.

pub mod clusterer;
pub mod dataset;
#[cfg(feature = "_debug")]
pub mod debug_helpers;
pub mod kmeans;
pub mod rng;
pub mod types;
pub mod vector;

pub use clusterer::{CentroidClusterer, Cluster, FlatClusterer};
pub use dataset::Dataset;
pub use types::{Vector2, VectorN, VectorNCreator, vector2d};
pub use vector::{Vector, VectorCreator};

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ClusterError {
    #[snafu(display("clusterer has no centroids"))]
    EmptyClusterer,

    #[snafu(display("cannot infer the vector space of an empty dataset"))]
    EmptyDataset,
}
