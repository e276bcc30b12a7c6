//! Loader configuration.
//!
//! Passed explicitly to [`load_movies`](crate::load_movies); there is no
//! process-wide config state.

use std::path::PathBuf;

/// Default catalog file, relative to the working directory
pub const DEFAULT_DATA_SOURCE: &str = "movies.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Path to the catalog CSV
    pub data_source: PathBuf,
}

impl LoaderConfig {
    pub fn new(data_source: impl Into<PathBuf>) -> Self {
        Self {
            data_source: data_source.into(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_SOURCE)
    }
}
