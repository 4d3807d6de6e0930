use data_loader::MovieCatalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("movie_metadata.csv"));

    println!("Loading movie catalog from {}...\n", path.display());

    let catalog = MovieCatalog::new();
    let start = Instant::now();
    let records = catalog.load(&path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", records.len());
    println!(
        "\nPerformance: {:.0} records/second",
        records.len() as f64 / elapsed.as_secs_f64()
    );
}
