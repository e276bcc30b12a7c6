//! Error types for the recommendation pipeline.

use thiserror::Error;

/// Errors surfaced by [`MovieRecommender`](crate::MovieRecommender).
///
/// Numeric edge cases (constant columns, all-zero feature rows) are handled
/// inside the pipeline and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The query title is not in the catalog. No fuzzy matching is attempted.
    #[error("Movie '{title}' not found in the database.")]
    NotFound { title: String },

    /// A recommender needs at least one movie
    #[error("Cannot build recommendations from an empty catalog")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
