//! Content-based "more like this" recommendations for movies.
//!
//! This crate provides:
//! - FeatureEngineer for turning the catalog into a feature matrix
//! - TfidfVectorizer and MinMaxScaler, the two building blocks it uses
//! - MovieRecommender for ranking movies by cosine similarity
//!
//! ## Architecture
//! A query runs in stages:
//! 1. The title is looked up in the title index
//! 2. The feature matrix is built (first query only) and cached
//! 3. The query row is scored against every row
//! 4. Rows are ranked, the query itself dropped, and the top k returned
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::{load_movies, LoaderConfig};
//! use pipeline::{MovieRecommender, DEFAULT_TOP_K};
//!
//! let movies = load_movies(&LoaderConfig::default())?;
//! let recommender = MovieRecommender::new(movies)?;
//!
//! for title in recommender.recommend("Inception", DEFAULT_TOP_K)? {
//!     println!("{}", title);
//! }
//! ```

pub mod error;
pub mod features;
pub mod recommender;
pub mod scaling;
pub mod similarity;
pub mod stop_words;
pub mod tfidf;

// Re-export main types
pub use error::{RecommendError, Result};
pub use features::{CategoricalField, FeatureEngineer, FeatureLayout, FeatureMatrix};
pub use recommender::{DEFAULT_TOP_K, MovieRecommender, Recommendation};
pub use scaling::MinMaxScaler;
pub use similarity::cosine_similarity;
pub use tfidf::TfidfVectorizer;
