use crate::vector::{Vector, VectorCreator};
use crate::{ClusterError, EmptyDatasetSnafu};
use snafu::prelude::*;

/// An ordered list of vectors from one vector space.
///
/// The contents are fixed at construction.
#[derive(Debug, Clone)]
pub struct Dataset<V: Vector> {
    data: Vec<V>,
    creator: V::Creator,
}

impl<V: Vector> Dataset<V> {
    /// Creates a dataset over the space of `creator`. `data` may be empty.
    pub fn new(data: Vec<V>, creator: V::Creator) -> Self {
        Self { data, creator }
    }

    /// Creates a dataset over the space of the first vector in `data`.
    ///
    /// Fails when `data` is empty, because there is no vector to take the space
    /// from. Use [`Dataset::new`] for datasets that may be empty.
    pub fn from_vectors(data: Vec<V>) -> Result<Self, ClusterError> {
        let creator = data.first().context(EmptyDatasetSnafu)?.creator();
        Ok(Self::new(data, creator))
    }

    /// The longest vector.
    ///
    /// Ties go to the vector that comes first. An empty dataset gives the null
    /// vector of its space.
    pub fn max(&self) -> V {
        let mut result = self.creator.null();
        let mut length = result.length();
        for v in &self.data {
            let v_length = v.length();
            if v_length > length {
                result = v.clone();
                length = v_length;
            }
        }
        result
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The vectors in their original order.
    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    pub fn creator(&self) -> &V::Creator {
        &self.creator
    }
}

impl<V: Vector> TryFrom<Vec<V>> for Dataset<V> {
    type Error = ClusterError;

    fn try_from(data: Vec<V>) -> Result<Self, Self::Error> {
        Self::from_vectors(data)
    }
}
