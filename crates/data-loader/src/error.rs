//! Error types for the data-loader crate.
//!
//! Every failure while reading the catalog CSV maps to one variant here, so
//! callers can tell a missing file apart from a malformed row.

use thiserror::Error;

/// Errors that can occur while loading and parsing the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("File {path} not found")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the loader depends on is absent from the header row
    #[error("Missing expected column in data: {column}")]
    MissingColumn { column: String },

    /// A cell couldn't be parsed
    ///
    /// `line` is the 1-based line number in the source file (header is line 1)
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The file has a header but no movie rows
    #[error("No movies found in {path}")]
    EmptyCatalog { path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
