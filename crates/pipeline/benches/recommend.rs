//! Benchmarks for feature matrix construction and similarity queries
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog so no dataset is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::Movie;
use pipeline::{FeatureEngineer, MovieRecommender, DEFAULT_TOP_K};

const GENRES: [&str; 8] = [
    "Action", "Adventure", "Comedy", "Crime", "Drama", "Romance", "Science Fiction", "Thriller",
];

fn synthetic_catalog(size: usize) -> Vec<Movie> {
    (0..size)
        .map(|i| {
            let genres = format!("{}|{}", GENRES[i % GENRES.len()], GENRES[(i * 3 + 1) % GENRES.len()]);
            let keywords = format!("keyword {}|keyword {}", i % 97, i % 31);
            let cast = format!("Actor {}|Actor {}|Actor {}", i % 211, i % 157, i % 53);
            let date = format!("{}-06-15", 1950 + (i % 70));

            Movie::new(format!("Movie {}", i), &date)
                .expect("valid date")
                .with_genres(&genres)
                .with_keywords(&keywords)
                .with_cast(&cast)
                .with_runtime(80.0 + (i % 90) as f64)
                .with_popularity((i % 500) as f64 / 10.0)
                .with_votes((i * 37 % 10_000) as u64, (i % 100) as f64 / 10.0)
        })
        .collect()
}

fn bench_build_matrix(c: &mut Criterion) {
    let movies = synthetic_catalog(5000);
    let engineer = FeatureEngineer::new(2026);

    c.bench_function("feature_matrix_build_5000", |b| {
        b.iter(|| {
            let matrix = engineer.build(black_box(&movies));
            black_box(matrix)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = MovieRecommender::with_engineer(synthetic_catalog(5000), FeatureEngineer::new(2026))
        .expect("non-empty catalog");
    // Build once outside the timed loop
    recommender.feature_matrix();

    c.bench_function("recommend_top5_5000", |b| {
        b.iter(|| {
            let titles = recommender
                .recommend(black_box("Movie 42"), black_box(DEFAULT_TOP_K))
                .unwrap();
            black_box(titles)
        })
    });
}

criterion_group!(benches, bench_build_matrix, bench_recommend);
criterion_main!(benches);
