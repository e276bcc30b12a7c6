//! # Data Loader Crate
//!
//! This crate turns a TMDB-style movie CSV into an ordered list of
//! immutable [`Movie`] records for the recommender.
//!
//! ## Main Components
//!
//! - **types**: The `Movie` record
//! - **parser**: Cell-level parsing, text cleaning and the missing-value policy
//! - **loader**: Read a whole catalog file
//! - **config**: `LoaderConfig`, passed explicitly to the loader
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_movies, LoaderConfig};
//!
//! let movies = load_movies(&LoaderConfig::new("data/movies.csv"))?;
//! println!("Loaded {} movies, first is {}", movies.len(), movies[0]);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_DATA_SOURCE, LoaderConfig};
pub use error::{DataLoadError, Result};
pub use loader::{load_movies, read_movies};
pub use parser::{clean_text, parse_release_date};
pub use types::{FIELD_DELIMITER, Movie, UNKNOWN_RELEASE_DATE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.data_source.to_str(), Some("movies.csv"));
    }

    #[test]
    fn test_read_movies_from_memory() {
        let data = "\
original_title,genres,keywords,production_companies,popularity,release_date,runtime,cast,vote_count,vote_average
Inception,Action|Adventure,Dream|Spy,Warner Bros,9.8,2010-07-16,148,Leonardo DiCaprio,20000,8.8
";
        let movies = read_movies(data.as_bytes()).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].to_string(), "Movie('Inception')");
        assert_eq!(movies[0].genre_list().collect::<Vec<_>>(), vec!["Action", "Adventure"]);
    }

    #[test]
    fn test_unknown_date_sentinel() {
        let movie = Movie::new("Lost Film", UNKNOWN_RELEASE_DATE).unwrap();
        assert_eq!(movie.release_year(), 1900);
    }
}
