//! Feature engineering for item-to-item similarity.
//!
//! This module turns the whole catalog into one dense [`FeatureMatrix`]:
//! three TF-IDF blocks (genres, keywords, cast) followed by five min-max
//! scaled continuous columns.

use crate::scaling::MinMaxScaler;
use crate::similarity::l2_norm;
use crate::tfidf::TfidfVectorizer;
use chrono::{Datelike, Local};
use data_loader::Movie;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Number of continuous columns: age, runtime, popularity, vote average,
/// log vote count
pub const CONTINUOUS_FEATURES: usize = 5;

/// The multi-valued text fields that become TF-IDF blocks, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Genres,
    Keywords,
    Cast,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 3] = [Self::Genres, Self::Keywords, Self::Cast];

    pub fn value<'a>(&self, movie: &'a Movie) -> &'a str {
        match self {
            Self::Genres => &movie.genres,
            Self::Keywords => &movie.keywords,
            Self::Cast => &movie.cast,
        }
    }
}

/// Width of each block of the feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLayout {
    pub genres: usize,
    pub keywords: usize,
    pub cast: usize,
    pub continuous: usize,
}

impl FeatureLayout {
    /// Total number of columns
    pub fn width(&self) -> usize {
        self.genres + self.keywords + self.cast + self.continuous
    }

    /// Column range of the continuous block
    pub fn continuous_range(&self) -> std::ops::Range<usize> {
        let start = self.genres + self.keywords + self.cast;
        start..start + self.continuous
    }
}

/// Dense row-major matrix, one row per movie in catalog order.
///
/// Read-only once built. Row norms are computed up front for cosine scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    layout: FeatureLayout,
    data: Vec<f64>,
    norms: Vec<f64>,
}

impl FeatureMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.layout.width()
    }

    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }

    /// Feature row for movie `index`
    ///
    /// Panics if `index >= rows()`.
    pub fn row(&self, index: usize) -> &[f64] {
        let cols = self.cols();
        &self.data[index * cols..(index + 1) * cols]
    }

    /// L2 norm of row `index`
    pub fn norm(&self, index: usize) -> f64 {
        self.norms[index]
    }
}

/// Builds the feature matrix for a catalog.
///
/// `reference_year` is "now" for the age column; [`Default`] uses the
/// current local year. Fixing it makes builds reproducible across days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEngineer {
    reference_year: i32,
}

impl FeatureEngineer {
    /// Create a new FeatureEngineer.
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Build the feature matrix for all movies.
    ///
    /// # Arguments
    /// * `movies` - The catalog; its order becomes the row order
    ///
    /// # Returns
    /// A matrix with `movies.len()` rows. The same input and reference year
    /// always give the same matrix.
    #[instrument(skip(self, movies), fields(movies = movies.len()))]
    pub fn build(&self, movies: &[Movie]) -> FeatureMatrix {
        // One independent vectorizer per field
        let blocks: Vec<Vec<Vec<f64>>> = CategoricalField::ALL
            .par_iter()
            .map(|field| {
                let documents: Vec<&str> = movies.iter().map(|m| field.value(m)).collect();
                let (vectorizer, rows) = TfidfVectorizer::fit_transform(&documents);
                debug!(
                    "{:?} vocabulary: {} tokens",
                    field,
                    vectorizer.vocabulary_len()
                );
                rows
            })
            .collect();

        let raw: Vec<[f64; CONTINUOUS_FEATURES]> =
            movies.iter().map(|m| self.continuous_row(m)).collect();
        let continuous = MinMaxScaler::fit_transform(&raw);

        let layout = FeatureLayout {
            genres: block_width(&blocks[0]),
            keywords: block_width(&blocks[1]),
            cast: block_width(&blocks[2]),
            continuous: CONTINUOUS_FEATURES,
        };

        let mut data = Vec::with_capacity(movies.len() * layout.width());
        for (index, scaled) in continuous.iter().enumerate() {
            for block in &blocks {
                data.extend_from_slice(&block[index]);
            }
            data.extend_from_slice(scaled);
        }

        // A row is all zeros when every field is stop words and every
        // continuous value sits at its column minimum
        let cols = layout.width();
        let norms: Vec<f64> = data.par_chunks(cols).map(l2_norm).collect();

        info!(
            "Built feature matrix: {} rows x {} cols (genres {}, keywords {}, cast {}, continuous {})",
            movies.len(),
            cols,
            layout.genres,
            layout.keywords,
            layout.cast,
            layout.continuous
        );

        FeatureMatrix {
            rows: movies.len(),
            layout,
            data,
            norms,
        }
    }

    /// Raw continuous features for one movie, before scaling.
    ///
    /// Order: age in years, runtime, popularity, vote average, ln(1 + votes)
    fn continuous_row(&self, movie: &Movie) -> [f64; CONTINUOUS_FEATURES] {
        [
            (self.reference_year - movie.release_year()) as f64,
            movie.runtime,
            movie.popularity,
            movie.vote_average,
            (movie.vote_count as f64).ln_1p(),
        ]
    }
}

impl Default for FeatureEngineer {
    fn default() -> Self {
        Self::new(Local::now().year())
    }
}

fn block_width(block: &[Vec<f64>]) -> usize {
    block.first().map(Vec::len).unwrap_or(0)
}
