use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use vmeans::debug_helpers::{BlobArgs, blob_centers, blobs};
use vmeans::kmeans::{Sampler, UniformSampler};
use vmeans::{Dataset, FlatClusterer, Vector, kmeans, rng};

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    blobs: BlobArgs,

    /// Start from the generated centers instead of sampled centroids
    #[arg(long)]
    from_centers: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = rng::with_seed(args.blobs.seed);

    let centers = blob_centers(&mut rng, args.blobs.k);
    let points = blobs(
        &mut rng,
        &centers,
        args.blobs.points_per_cluster,
        args.blobs.spread,
    );
    let dataset = match Dataset::from_vectors(points) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let t = Instant::now();
    let initial = if args.from_centers {
        centers.clone()
    } else {
        let max = dataset.max().length();
        let mut sampler = UniformSampler::new(*dataset.creator(), &mut rng);
        (0..args.blobs.k).map(|i| sampler.sample(i, max)).collect()
    };
    let (clusterer, info) = kmeans::k_means_with_centroids_debug(&dataset, initial);
    let elapsed = t.elapsed();

    let partition = match clusterer.clustered_partition(&dataset) {
        Ok(partition) => partition,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!(
        "{} points, k={}, {} passes, {:?}",
        dataset.count(),
        clusterer.len(),
        info.iterations,
        elapsed,
    );
    for cluster in clusterer.clusters() {
        let members = partition.get(&cluster).map_or(0, Vec::len);
        if let Some(centroid) = clusterer.centroid_of(cluster) {
            println!(
                "{cluster}: centroid ({:.4}, {:.4}), {members} points",
                centroid[0], centroid[1],
            );
        }
    }
    for (i, center) in centers.iter().enumerate() {
        println!("generated center {i}: ({:.4}, {:.4})", center[0], center[1]);
    }
}
