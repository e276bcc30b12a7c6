//! Parser for the movie catalog CSV.
//!
//! The catalog is a TMDB-style export with one movie per row. Only the
//! columns in [`REQUIRED_COLUMNS`] are read; everything else is ignored.
//!
//! Missing-value policy:
//! - text fields: missing -> empty string, whitespace collapsed
//! - numeric fields: missing -> 0
//! - release date: missing -> [`UNKNOWN_RELEASE_DATE`], unparseable -> error

use crate::error::{DataLoadError, Result};
use crate::types::{Movie, UNKNOWN_RELEASE_DATE};
use chrono::NaiveDate;
use serde::Deserialize;

/// Columns the loader needs, in the order they appear in the TMDB export
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "original_title",
    "genres",
    "keywords",
    "production_companies",
    "popularity",
    "release_date",
    "runtime",
    "cast",
    "vote_count",
    "vote_average",
];

/// Date layouts accepted for `release_date`
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// One CSV row as it appears on disk, before any defaulting.
///
/// Numbers stay as strings so a bad cell can be reported with its line.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMovieRow {
    original_title: String,
    genres: Option<String>,
    keywords: Option<String>,
    production_companies: Option<String>,
    popularity: Option<String>,
    release_date: Option<String>,
    runtime: Option<String>,
    cast: Option<String>,
    vote_count: Option<String>,
    vote_average: Option<String>,
}

/// Collapse runs of whitespace into single spaces and trim the ends.
///
/// Example: "  Action |  Sci-Fi " -> "Action | Sci-Fi"
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a release date string.
///
/// Example: "2010-07-16" -> 2010-07-16
///          "invalid_date" -> Err(InvalidValue)
pub fn parse_release_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DataLoadError::InvalidValue {
            field: "release_date".to_string(),
            value: s.to_string(),
        })
}

/// Returns the first required column missing from `headers`, if any
pub(crate) fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

impl RawMovieRow {
    /// Apply the missing-value policy and build a [`Movie`]
    pub(crate) fn into_movie(self, line: usize) -> Result<Movie> {
        let release_date = non_empty(self.release_date.as_deref()).unwrap_or(UNKNOWN_RELEASE_DATE);

        let popularity = parse_number(self.popularity.as_deref(), "popularity", line)?;
        let runtime = parse_number(self.runtime.as_deref(), "runtime", line)?;
        let vote_average = parse_number(self.vote_average.as_deref(), "vote_average", line)?;
        // Some exports write counts as "1234.0"
        let vote_count = parse_number(self.vote_count.as_deref(), "vote_count", line)?.round() as u64;

        let movie = Movie::new(self.original_title.trim(), release_date)?
            .with_genres(self.genres.as_deref().unwrap_or(""))
            .with_keywords(self.keywords.as_deref().unwrap_or(""))
            .with_companies(self.production_companies.as_deref().unwrap_or(""))
            .with_cast(self.cast.as_deref().unwrap_or(""))
            .with_popularity(popularity)
            .with_runtime(runtime)
            .with_votes(vote_count, vote_average);

        Ok(movie)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a non-negative number; a missing cell is 0.0
fn parse_number(value: Option<&str>, field: &str, line: usize) -> Result<f64> {
    let Some(raw) = non_empty(value) else {
        return Ok(0.0);
    };

    let number: f64 = raw.parse().map_err(|e| DataLoadError::ParseError {
        line,
        reason: format!("Invalid {}: {}", field, e),
    })?;

    if !number.is_finite() || number < 0.0 {
        return Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(number)
}
