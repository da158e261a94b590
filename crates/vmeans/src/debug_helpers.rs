use crate::types::{Vector2, vector2d};
use crate::vector::Vector;
use clap::Parser;
use rand::RngExt;

#[derive(Parser)]
pub struct BlobArgs {
    /// Number of clusters to generate and to search for
    #[arg(long, default_value_t = 4)]
    pub k: usize,

    /// Number of points around each generated center
    #[arg(long, default_value_t = 50)]
    pub points_per_cluster: usize,

    /// Half-width of the square each blob is spread over
    #[arg(long, default_value_t = 0.15)]
    pub spread: f64,

    /// Seed for data generation and centroid sampling
    #[arg(long, default_value_t = crate::rng::RANDOM_SEED)]
    pub seed: u64,
}

/// Centers spread over the unit square, one per cluster.
pub fn blob_centers(rng: &mut impl RngExt, k: usize) -> Vec<Vector2> {
    (0..k)
        .map(|_| vector2d(rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

/// `per_center` points around each center, interleaved by center.
pub fn blobs(
    rng: &mut impl RngExt,
    centers: &[Vector2],
    per_center: usize,
    spread: f64,
) -> Vec<Vector2> {
    let mut points = Vec::with_capacity(centers.len() * per_center);
    for _ in 0..per_center {
        for center in centers {
            let offset = vector2d(
                rng.random_range(-spread..=spread),
                rng.random_range(-spread..=spread),
            );
            points.push(center.add(&offset));
        }
    }
    points
}
