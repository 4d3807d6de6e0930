//! Parser for the movie catalog CSV file.
//!
//! The file is comma-delimited with a header row. Fields may be
//! double-quoted to contain literal commas; a row is made safe to split by
//! masking the commas inside quoted spans with a pipe placeholder, splitting
//! on `,`, and restoring the placeholders afterwards. The restore step
//! cannot tell a placeholder from a literal pipe, so pipes in the input
//! (notably the pipe-delimited `genres` column) come back as commas. This is
//! a documented limitation rather than silent corruption: genre matching
//! downstream is substring-based and never splits on the delimiter.

use crate::error::{DataLoadError, Result};
use crate::types::{LINK_FIELD, MovieRecord};
use regex::Regex;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Matches one double-quoted field, non-greedily, allowing backslash escapes.
static QUOTED_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:\\.|[^"\\])*?""#).unwrap());

/// Stand-in for commas inside quoted fields while a row is split.
const COMMA_PLACEHOLDER: &str = "|";

/// Extract the IMDB title id from a movie link.
///
/// Example: `http://www.imdb.com/title/tt0499549/?ref_=fn_tt_tt_1` yields
/// `tt0499549`.
///
/// The id is whatever lands in the fifth `/`-separated segment; its shape is
/// not validated. A link with fewer segments yields `None`.
pub fn parse_imdb_id(link: &str) -> Option<&str> {
    link.split('/').nth(4)
}

/// Parse the catalog file into deduplicated records in file order.
///
/// An unreadable file is fatal. A row whose link column yields no id aborts
/// the parse with the offending line number. Rows repeating an already-seen
/// id are dropped, first occurrence wins.
pub fn parse_records(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = fs::read_to_string(path).map_err(|source| DataLoadError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    let records = parse_content(&content)?;
    tracing::info!(
        "Parsed {} movie records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn parse_content(content: &str) -> Result<Vec<MovieRecord>> {
    let mut lines = content
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    // The first surviving line labels the columns. A file without one has no
    // rows either, so the catalog is empty.
    let Some((_, header_line)) = lines.next() else {
        return Ok(Vec::new());
    };
    let header: Vec<String> = header_line.split(',').map(str::to_string).collect();

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for (line_no, line) in lines {
        let record = build_record(&header, split_row(line), line_no)?;
        if !seen.insert(record.id.clone()) {
            tracing::debug!("Dropping duplicate record {} at line {}", record.id, line_no);
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

/// Split one data row on commas, honoring quoted fields.
fn split_row(line: &str) -> Vec<String> {
    mask_quoted_fields(line)
        .split(',')
        .map(|field| field.replace(COMMA_PLACEHOLDER, ",").trim().to_string())
        .collect()
}

/// Strip the quotes from each quoted span and hide its commas behind the
/// placeholder so the row can be split naively.
fn mask_quoted_fields(line: &str) -> Cow<'_, str> {
    QUOTED_FIELD.replace_all(line, |caps: &regex::Captures<'_>| {
        let quoted = &caps[0];
        quoted[1..quoted.len() - 1].replace(',', COMMA_PLACEHOLDER)
    })
}

/// Zip split values against the header positionally and derive the id.
///
/// A row shorter than the header yields a partial record; the missing
/// trailing columns stay absent from the map.
fn build_record(header: &[String], values: Vec<String>, line_no: usize) -> Result<MovieRecord> {
    let mut fields = HashMap::with_capacity(values.len());
    for (name, value) in header.iter().zip(values) {
        fields.insert(name.clone(), value);
    }

    let link = fields.get(LINK_FIELD).map(String::as_str).unwrap_or("");
    let id = parse_imdb_id(link)
        .ok_or_else(|| DataLoadError::MalformedLink {
            line: line_no,
            link: link.to_string(),
        })?
        .to_string();

    Ok(MovieRecord { id, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "movie_title,genres,title_year,imdb_score,movie_imdb_link";

    fn row(title: &str, genres: &str, year: &str, score: &str, id: &str) -> String {
        format!(
            "{title},{genres},{year},{score},http://www.imdb.com/title/{id}/?ref_=fn_tt_tt_1"
        )
    }

    #[test]
    fn test_parse_imdb_id() {
        assert_eq!(
            parse_imdb_id("http://www.imdb.com/title/tt0499549/?ref_=fn_tt_tt_1"),
            Some("tt0499549")
        );
        assert_eq!(parse_imdb_id("http://www.imdb.com"), None);
        assert_eq!(parse_imdb_id(""), None);
    }

    #[test]
    fn test_split_row_plain() {
        assert_eq!(split_row("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_row_quoted_comma() {
        // A quoted span survives as a single field with its comma intact.
        assert_eq!(
            split_row(r#"Movie,"Action,Adventure",2009"#),
            vec!["Movie", "Action,Adventure", "2009"]
        );
    }

    #[test]
    fn test_split_row_trims_whitespace() {
        assert_eq!(split_row(" a , b ,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_row_restores_pipes_as_commas() {
        // Native pipes collide with the placeholder and come back as commas.
        assert_eq!(
            split_row("Action|Adventure|Sci-Fi,x"),
            vec!["Action,Adventure,Sci-Fi", "x"]
        );
    }

    #[test]
    fn test_parse_content_builds_keyed_records() {
        let content = format!(
            "{HEADER}\n{}\n{}\n",
            row("Avatar", "Action|Adventure|Sci-Fi", "2009", "7.9", "tt0499549"),
            row("Spectre", "Action|Thriller", "2015", "6.8", "tt2379713"),
        );

        let records = parse_content(&content).unwrap();
        assert_eq!(records.len(), 2);

        let avatar = &records[0];
        assert_eq!(avatar.id, "tt0499549");
        assert_eq!(avatar.title(), "Avatar");
        assert_eq!(avatar.genres(), "Action,Adventure,Sci-Fi");
        assert_eq!(avatar.field("imdb_score"), Some("7.9"));
    }

    #[test]
    fn test_parse_content_quoted_genre_round_trip() {
        let content = format!(
            "{HEADER}\n{}\n",
            row("Movie", "\"Action,Adventure\"", "2000", "7.0", "tt0000001"),
        );

        let records = parse_content(&content).unwrap();
        assert_eq!(records[0].genres(), "Action,Adventure");
    }

    #[test]
    fn test_parse_content_skips_blank_lines_and_crlf() {
        let content = format!(
            "{HEADER}\r\n\r\n{}\r\n   \n{}\r\n",
            row("One", "Drama", "1999", "8.1", "tt0000001"),
            row("Two", "Comedy", "2001", "6.5", "tt0000002"),
        );

        let records = parse_content(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "One");
        assert_eq!(records[1].title(), "Two");
    }

    #[test]
    fn test_parse_content_deduplicates_first_wins() {
        let content = format!(
            "{HEADER}\n{}\n{}\n{}\n",
            row("Original", "Drama", "1999", "8.1", "tt0000001"),
            row("Duplicate", "Horror", "2005", "4.2", "tt0000001"),
            row("Other", "Comedy", "2001", "6.5", "tt0000002"),
        );

        let records = parse_content(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "Original");
        assert_eq!(records[1].title(), "Other");
    }

    #[test]
    fn test_parse_content_partial_row() {
        // A short row keeps its leading columns; the rest stay absent.
        let content = format!("{HEADER}\nLonely\n");
        let err = parse_content(&content).unwrap_err();
        // With no link column the id cannot be derived.
        assert!(matches!(err, DataLoadError::MalformedLink { line: 2, .. }));

        let content = "movie_imdb_link,movie_title,genres\nhttp://www.imdb.com/title/tt0000001/,Short\n";
        let records = parse_content(content).unwrap();
        assert_eq!(records[0].title(), "Short");
        assert!(records[0].field("genres").is_none());
    }

    #[test]
    fn test_parse_content_malformed_link_names_line() {
        let content = format!(
            "{HEADER}\n{}\nBad,Drama,1999,8.1,nowhere\n",
            row("Good", "Drama", "1999", "8.1", "tt0000001"),
        );

        let err = parse_content(&content).unwrap_err();
        match err {
            DataLoadError::MalformedLink { line, link } => {
                assert_eq!(line, 3);
                assert_eq!(link, "nowhere");
            }
            other => panic!("expected MalformedLink, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_content_empty_input() {
        assert!(parse_content("").unwrap().is_empty());
        assert!(parse_content("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_records_missing_file() {
        let err = parse_records(Path::new("no/such/catalog.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileRead { .. }));
    }

    #[test]
    fn test_parse_records_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "{}", row("Avatar", "Sci-Fi", "2009", "7.9", "tt0499549")).unwrap();

        let records = parse_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "tt0499549");
    }
}
