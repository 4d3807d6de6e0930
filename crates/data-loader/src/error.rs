//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog or reading
/// individual record fields.
///
/// Struct variants carry enough context (path, line number, field name) for
/// the message to point at the offending input on its own.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The catalog file could not be read. Fatal; there is no partial-result
    /// fallback.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// No IMDB id could be extracted from a row's link column, either because
    /// the URL has fewer than five `/`-separated segments or because the
    /// column is missing entirely.
    #[error("Cannot extract an IMDB id from link {link:?} at line {line}")]
    MalformedLink { line: usize, link: String },

    /// A record is missing a column that a lookup requires.
    #[error("Record has no {field} field")]
    MissingField { field: String },

    /// A field that must be numeric did not parse as a number.
    #[error("Invalid numeric value for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
