use data_loader::{LoaderConfig, load_movies};
use std::time::Instant;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "movies.csv".to_string());
    let config = LoaderConfig::new(path);

    println!("Loading movie catalog from {}...\n", config.data_source.display());

    let start = Instant::now();
    let movies = load_movies(&config).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let with_cast = movies.iter().filter(|m| !m.cast.is_empty()).count();
    let unknown_dates = movies.iter().filter(|m| m.release_year() == 1900).count();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies.len());
    println!("With cast: {}", with_cast);
    println!("Unknown release date: {}", unknown_dates);
    println!("\nPerformance: {:.0} movies/second",
             movies.len() as f64 / elapsed.as_secs_f64());
}
