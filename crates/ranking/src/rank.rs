//! Top-N ranking over the cached catalog.

use crate::profile::UserProfile;
use crate::scoring;
use anyhow::{Context, Result, anyhow};
use data_loader::{MovieCatalog, MovieRecord};
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

/// One entry of a ranking result.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMovie {
    pub movie_title: String,
    /// Personalized score rounded to two decimals.
    pub user_specific_score: f64,
}

/// Computes personalized rankings from the movie catalog.
///
/// The engine shares a [`MovieCatalog`] and requests the record set through
/// [`MovieCatalog::load`] on every call, so the file is parsed once and every
/// later request is served from the cache. Scores are derived values; the
/// cached records are never mutated.
pub struct RankingEngine {
    catalog: Arc<MovieCatalog>,
    data_path: PathBuf,
}

impl RankingEngine {
    /// Create an engine over a shared catalog and the dataset it loads from.
    pub fn new(catalog: Arc<MovieCatalog>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            data_path: data_path.into(),
        }
    }

    /// Personalized score for a single movie, looked up by IMDB id.
    pub fn score_for_user(&self, id: &str, user: &UserProfile) -> Result<f64> {
        self.catalog.load(&self.data_path)?;
        let record = self
            .catalog
            .get(id)
            .ok_or_else(|| anyhow!("No movie with id {id}"))?;
        scoring::user_score(record, user)
    }

    /// Base score for a single movie, looked up by IMDB id.
    pub fn fractal_score(&self, id: &str) -> Result<f64> {
        self.catalog.load(&self.data_path)?;
        let record = self
            .catalog
            .get(id)
            .ok_or_else(|| anyhow!("No movie with id {id}"))?;
        scoring::fractal_score(record)
    }

    /// The ten best movies for the user.
    pub fn top10(&self, user: &UserProfile) -> Result<Vec<RankedMovie>> {
        self.top_n(user, 10)
    }

    /// The `limit` best movies for the user, highest score first.
    ///
    /// Returns fewer entries when the catalog is smaller than `limit`. Ties
    /// keep their original file order (the sort is stable).
    pub fn top_n(&self, user: &UserProfile, limit: usize) -> Result<Vec<RankedMovie>> {
        let records = self.catalog.load(&self.data_path)?;

        let mut scored: Vec<(&MovieRecord, f64)> = Vec::with_capacity(records.len());
        for record in records {
            let score = scoring::user_score(record, user)
                .with_context(|| format!("Failed to score movie {}", record.id))?;
            scored.push((record, score));
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        tracing::debug!(
            "Scored {} records, returning top {}",
            scored.len(),
            limit.min(scored.len())
        );

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(record, score)| RankedMovie {
                movie_title: record.title().to_string(),
                user_specific_score: round2(score),
            })
            .collect())
    }
}

/// Round to two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(18.8955), 18.9);
        assert_eq!(round2(19.7000000001), 19.7);
        assert_eq!(round2(13.0), 13.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        // 0.125 and 0.375 scale to exactly 12.5 and 37.5.
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }
}
