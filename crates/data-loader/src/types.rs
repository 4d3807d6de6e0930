//! Core domain types for the movie catalog.

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// IMDB title id extracted from a movie's link column, e.g. `tt0499549`.
///
/// Used as the stable lookup key and as the deduplication key during
/// parsing. The expected shape is `tt` followed by digits, but the shape is
/// never validated.
pub type ImdbId = String;

/// Column holding the movie's IMDB link, from which the id is derived.
pub const LINK_FIELD: &str = "movie_imdb_link";
/// Column holding the display title.
pub const TITLE_FIELD: &str = "movie_title";
/// Column holding the delimiter-separated genre list.
pub const GENRES_FIELD: &str = "genres";
/// Column holding the IMDB rating.
pub const SCORE_FIELD: &str = "imdb_score";
/// Column holding the release year.
pub const YEAR_FIELD: &str = "title_year";

/// One row of the catalog file, keyed by header column name.
///
/// Records are built once during parsing and never mutated afterwards; the
/// ranking layer derives per-user scores as separate values. A row shorter
/// than the header produces a partial record whose trailing columns are
/// absent from the map rather than present-but-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Id derived from the `movie_imdb_link` column.
    pub id: ImdbId,
    /// Every column of the row, keyed by header name.
    pub fields: HashMap<String, String>,
}

impl MovieRecord {
    /// Raw value of a column, if the row has one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Display title; empty when the column is absent.
    pub fn title(&self) -> &str {
        self.field(TITLE_FIELD).unwrap_or("")
    }

    /// Raw genre list; empty when the column is absent.
    ///
    /// The delimiter between genre names depends on how the row was written
    /// (pipes in the file come out as commas, see the parser module), so
    /// callers match genres by substring rather than by splitting.
    pub fn genres(&self) -> &str {
        self.field(GENRES_FIELD).unwrap_or("")
    }

    /// The movie's IMDB link; empty when the column is absent.
    pub fn imdb_link(&self) -> &str {
        self.field(LINK_FIELD).unwrap_or("")
    }

    /// IMDB rating as a number.
    pub fn imdb_score(&self) -> Result<f64> {
        self.numeric_field(SCORE_FIELD)
    }

    /// Release year as a number.
    pub fn title_year(&self) -> Result<f64> {
        self.numeric_field(YEAR_FIELD)
    }

    /// A missing or unparseable numeric field is a hard error; coercing it
    /// to zero would corrupt ranking order invisibly.
    fn numeric_field(&self, name: &str) -> Result<f64> {
        let value = self.field(name).ok_or_else(|| DataLoadError::MissingField {
            field: name.to_string(),
        })?;
        value.parse().map_err(|_| DataLoadError::InvalidNumber {
            field: name.to_string(),
            value: value.to_string(),
        })
    }
}
