//! The similarity ranker.
//!
//! [`MovieRecommender`] owns the catalog and answers "more like this"
//! queries. The feature matrix is built on first use and then shared by
//! every later query.
//!
//! ## States
//! - UNBUILT: catalog and title index only
//! - READY: feature matrix cached
//!
//! The UNBUILT -> READY transition happens once. A different catalog needs a
//! new recommender.

use crate::error::{RecommendError, Result};
use crate::features::{FeatureEngineer, FeatureMatrix};
use crate::similarity::{rank, score_all};
use data_loader::Movie;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, info, instrument, warn};

/// Number of recommendations returned when the caller has no preference
pub const DEFAULT_TOP_K: usize = 5;

/// One ranked result
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    /// Cosine similarity to the query movie
    pub score: f64,
}

/// Recommends movies similar to a given title.
///
/// Titles are expected to be unique. If the catalog repeats a title, a
/// warning is logged and lookups resolve to its last occurrence; every row is
/// still ranked.
///
/// `MovieRecommender` is `Send + Sync`. Concurrent first queries build the
/// matrix once; the others wait for that build and reuse it.
pub struct MovieRecommender {
    movies: Vec<Movie>,
    title_index: HashMap<String, usize>,
    engineer: FeatureEngineer,
    matrix: OnceLock<FeatureMatrix>,
}

impl MovieRecommender {
    /// Create a recommender with a feature engineer for the current year.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        Self::with_engineer(movies, FeatureEngineer::default())
    }

    /// Create a recommender with an explicit feature engineer.
    pub fn with_engineer(movies: Vec<Movie>, engineer: FeatureEngineer) -> Result<Self> {
        if movies.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let mut title_index = HashMap::with_capacity(movies.len());
        for (index, movie) in movies.iter().enumerate() {
            if title_index.insert(movie.title.clone(), index).is_some() {
                warn!("Duplicate title '{}' in catalog; using row {}", movie.title, index);
            }
        }

        debug!("Indexed {} titles", title_index.len());
        Ok(Self {
            movies,
            title_index,
            engineer,
            matrix: OnceLock::new(),
        })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Always false: construction rejects an empty catalog
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// True once the feature matrix has been built
    pub fn is_built(&self) -> bool {
        self.matrix.get().is_some()
    }

    /// The feature matrix, building it if this is the first call.
    pub fn feature_matrix(&self) -> &FeatureMatrix {
        self.matrix.get_or_init(|| {
            info!("Building feature matrix for {} movies", self.movies.len());
            self.engineer.build(&self.movies)
        })
    }

    /// Titles of the `k` movies most similar to `title`, best first.
    ///
    /// Returns `min(k, len() - 1)` titles and never `title` itself.
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<String>> {
        Ok(self
            .recommend_scored(title, k)?
            .into_iter()
            .map(|r| r.title)
            .collect())
    }

    /// Like [`recommend`](Self::recommend), with similarity scores.
    ///
    /// The first call builds the matrix even if `title` is then not found.
    #[instrument(skip(self))]
    pub fn recommend_scored(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let matrix = self.feature_matrix();

        let query = self.title_index.get(title).copied().ok_or_else(|| {
            tracing::error!("Movie '{}' not found.", title);
            RecommendError::NotFound {
                title: title.to_string(),
            }
        })?;

        let scores = score_all(matrix, query);

        let recommendations: Vec<Recommendation> = rank(&scores, query, k)
            .into_iter()
            .map(|(index, score)| Recommendation {
                title: self.movies[index].title.clone(),
                score,
            })
            .collect();

        info!(
            "Recommendations for '{}': {:?}",
            title,
            recommendations.iter().map(|r| r.title.as_str()).collect::<Vec<_>>()
        );
        Ok(recommendations)
    }
}
