//! Core domain types for the movie catalog.
//!
//! A [`Movie`] is built once at load time and never mutated afterwards.
//! Multi-valued text fields keep their raw `|`-separated form; turning them
//! into features is the pipeline crate's job.

use crate::error::Result;
use crate::parser::{clean_text, parse_release_date};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter between entries of a multi-valued field ("Action|Adventure")
pub const FIELD_DELIMITER: char = '|';

/// Release date used when the source row has no date at all.
pub const UNKNOWN_RELEASE_DATE: &str = "1900-01-01";

// =============================================================================
// Movie
// =============================================================================

/// One catalog entry.
///
/// `title` is the lookup key for recommendations. Titles are expected to be
/// unique within a catalog; that is a contract on whoever builds the catalog.
///
/// Construct with [`Movie::new`] and the `with_*` methods:
///
/// ```
/// use data_loader::Movie;
///
/// let movie = Movie::new("Inception", "2010-07-16")
///     .unwrap()
///     .with_genres("Action|Adventure")
///     .with_runtime(148.0)
///     .with_votes(20000, 8.8);
///
/// assert_eq!(movie.release_year(), 2010);
/// assert_eq!(movie.to_string(), "Movie('Inception')");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// `|`-separated genre names
    pub genres: String,
    /// `|`-separated plot keywords
    pub keywords: String,
    /// `|`-separated production companies (carried, not used as a feature)
    pub companies: String,
    /// `|`-separated lead cast
    pub cast: String,
    pub popularity: f64,
    pub release_date: NaiveDate,
    /// Runtime in minutes
    pub runtime: f64,
    pub vote_count: u64,
    pub vote_average: f64,
}

impl Movie {
    /// Create a movie with a title and a release date string.
    ///
    /// Fails with `InvalidValue` if the date can't be parsed. All other
    /// fields start empty / zero.
    pub fn new(title: impl Into<String>, release_date: &str) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            genres: String::new(),
            keywords: String::new(),
            companies: String::new(),
            cast: String::new(),
            popularity: 0.0,
            release_date: parse_release_date(release_date)?,
            runtime: 0.0,
            vote_count: 0,
            vote_average: 0.0,
        })
    }

    pub fn with_genres(mut self, genres: &str) -> Self {
        self.genres = clean_text(genres);
        self
    }

    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = clean_text(keywords);
        self
    }

    pub fn with_companies(mut self, companies: &str) -> Self {
        self.companies = clean_text(companies);
        self
    }

    pub fn with_cast(mut self, cast: &str) -> Self {
        self.cast = clean_text(cast);
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_votes(mut self, vote_count: u64, vote_average: f64) -> Self {
        self.vote_count = vote_count;
        self.vote_average = vote_average;
        self
    }

    /// Year component of the release date
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    /// Iterate over the genre entries (each entry is one token, spaces included)
    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        split_field(&self.genres)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie('{}')", self.title)
    }
}

fn split_field(value: &str) -> impl Iterator<Item = &str> {
    value.split(FIELD_DELIMITER).filter(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataLoadError;

    #[test]
    fn test_movie_creation() {
        let movie = Movie::new("Inception", "2010-07-16")
            .unwrap()
            .with_genres("Action|Adventure")
            .with_keywords("Dream|Spy")
            .with_companies("Warner Bros")
            .with_popularity(9.8)
            .with_runtime(148.0)
            .with_cast("Leonardo DiCaprio")
            .with_votes(20000, 8.8);

        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.genres, "Action|Adventure");
        assert_eq!(movie.release_year(), 2010);
        assert_eq!(movie.runtime, 148.0);
        assert_eq!(movie.cast, "Leonardo DiCaprio");
        assert_eq!(movie.vote_count, 20000);
        assert_eq!(movie.vote_average, 8.8);
        assert_eq!(movie.to_string(), "Movie('Inception')");
    }

    #[test]
    fn test_movie_invalid_date() {
        let result = Movie::new("Test", "invalid_date");
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_text_fields_are_cleaned() {
        let movie = Movie::new("Test", "2000-01-01")
            .unwrap()
            .with_cast("  Tom   Hanks|Meg  Ryan ");

        assert_eq!(movie.cast, "Tom Hanks|Meg Ryan");
    }

    #[test]
    fn test_empty_field_has_no_entries() {
        let movie = Movie::new("Test", "2000-01-01").unwrap();
        assert_eq!(movie.genre_list().count(), 0);
    }
}
