//! Process-lifetime cache over the parsed record set.

use crate::error::Result;
use crate::parser;
use crate::types::MovieRecord;
use std::path::Path;
use std::sync::OnceLock;

/// Parse-once, cache-forever store for the movie catalog.
///
/// The first successful [`load`](Self::load) parses the file and caches the
/// records; every later call returns the cached set **regardless of the path
/// it is given**, and the cache is never refreshed even if the file changes.
/// This is the documented contract, not a cache keyed by path. Ranking over
/// a second dataset in the same process means constructing a second catalog.
///
/// The catalog is owned by the caller and usually shared behind an `Arc`.
/// Initialization is run-once: concurrent first calls may each parse the
/// file, but only one result is installed and all callers observe it.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    records: OnceLock<Vec<MovieRecord>>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self {
            records: OnceLock::new(),
        }
    }

    /// Returns the record set, parsing `path` on the first call.
    pub fn load(&self, path: &Path) -> Result<&[MovieRecord]> {
        if let Some(records) = self.records.get() {
            return Ok(records);
        }

        let parsed = parser::parse_records(path)?;
        // A concurrent loader may have finished first; its records win.
        Ok(self.records.get_or_init(|| parsed))
    }

    /// The cached record set, if a load has completed.
    pub fn records(&self) -> Option<&[MovieRecord]> {
        self.records.get().map(Vec::as_slice)
    }

    /// Look up a record by IMDB id. Linear scan over the cached set.
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.records()?.iter().find(|record| record.id == id)
    }
}
