//! Catalog loading.
//!
//! Reads the CSV named by a [`LoaderConfig`] into an ordered `Vec<Movie>`.
//! Row order in the file becomes row order in the feature matrix, so it is
//! preserved exactly.

use crate::config::LoaderConfig;
use crate::error::{DataLoadError, Result};
use crate::parser::{self, RawMovieRow};
use crate::types::Movie;
use std::io::Read;
use tracing::{debug, info, instrument};

/// Load every movie from the configured CSV file.
///
/// Steps:
/// 1. Check the file exists
/// 2. Verify the header has every required column
/// 3. Parse rows in file order, applying the missing-value policy
/// 4. Reject a catalog with no rows
#[instrument(skip(config), fields(path = %config.data_source.display()))]
pub fn load_movies(config: &LoaderConfig) -> Result<Vec<Movie>> {
    let path = &config.data_source;
    if !path.exists() {
        tracing::error!("File {} does not exist.", path.display());
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = std::fs::File::open(path)?;
    let movies = read_movies(file)?;

    if movies.is_empty() {
        return Err(DataLoadError::EmptyCatalog {
            path: path.display().to_string(),
        });
    }

    info!("Successfully loaded {} movies.", movies.len());
    Ok(movies)
}

/// Parse movies from any CSV source with a header row.
///
/// Does not reject an empty catalog; [`load_movies`] does that.
pub fn read_movies<R: Read>(source: R) -> Result<Vec<Movie>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    parser::check_headers(&headers)?;

    let mut movies = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let row: RawMovieRow = record.deserialize(Some(&headers))?;
        movies.push(row.into_movie(line)?);
    }

    debug!("Parsed {} rows", movies.len());
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "budget,genres,keywords,original_title,popularity,production_companies,release_date,runtime,cast,vote_average,vote_count";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", HEADER).expect("write header");
        for row in rows {
            writeln!(file, "{}", row).expect("write row");
        }
        file
    }

    #[test]
    fn test_load_movies_in_file_order() {
        let file = write_csv(&[
            "237000000,Action|Adventure,culture clash|future,Avatar,150.4,Ingenious Film Partners,2009-12-10,162,Sam Worthington|Zoe Saldana,7.2,11800",
            "300000000,Adventure|Fantasy,ocean|pirate,Pirates of the Caribbean: At World's End,139.1,Walt Disney Pictures,2007-05-19,169,Johnny Depp,6.9,4500",
        ]);

        let movies = load_movies(&LoaderConfig::new(file.path())).unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Avatar");
        assert_eq!(movies[1].title, "Pirates of the Caribbean: At World's End");
        assert_eq!(movies[1].release_year(), 2007);
    }

    #[test]
    fn test_quoted_fields_and_missing_values() {
        let file = write_csv(&[
            "0,Drama,,\"Crash, The\",,,,,\"Sandra  Bullock|Don Cheadle\",,",
        ]);

        let movies = load_movies(&LoaderConfig::new(file.path())).unwrap();

        let movie = &movies[0];
        assert_eq!(movie.title, "Crash, The");
        assert_eq!(movie.keywords, "");
        assert_eq!(movie.cast, "Sandra Bullock|Don Cheadle");
        assert_eq!(movie.popularity, 0.0);
        assert_eq!(movie.vote_count, 0);
        assert_eq!(movie.release_year(), 1900);
    }

    #[test]
    fn test_invalid_date_is_fatal() {
        let file = write_csv(&["0,Drama,,Broken,1.0,,someday,90,,5.0,10"]);

        let result = load_movies(&LoaderConfig::new(file.path()));
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_movies(&LoaderConfig::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_missing_column() {
        let data = "original_title,genres\nAvatar,Action\n";
        let result = read_movies(data.as_bytes());
        assert!(matches!(
            result,
            Err(DataLoadError::MissingColumn { column }) if column == "keywords"
        ));
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let file = write_csv(&[]);
        let result = load_movies(&LoaderConfig::new(file.path()));
        assert!(matches!(result, Err(DataLoadError::EmptyCatalog { .. })));
    }
}
