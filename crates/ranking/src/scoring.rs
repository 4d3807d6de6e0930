//! Scoring formulas for movie records.
//!
//! The base "fractal" score depends only on the record; the user score adds
//! personalization bonuses on top. Genre checks are case-sensitive substring
//! containment on the raw genre string, never a tokenized set: a list
//! delimited by commas and one delimited by pipes match identically because
//! genre names contain neither delimiter. Callers rely on the substring
//! behavior; do not replace it with parsed genre sets.

use crate::profile::UserProfile;
use anyhow::Result;
use data_loader::MovieRecord;

/// Weight applied to the IMDB rating.
const RATING_WEIGHT: f64 = 2.3;
/// Divisor turning the release year into a small penalty.
const YEAR_DIVISOR: f64 = 2000.0;
/// Bonus for Sci-Fi or Adventure titles.
const SCIFI_ADVENTURE_BONUS: f64 = 1.5;
/// Bonus for pre-cutoff titles when the user likes old movies.
const OLD_MOVIE_BONUS: f64 = 2.5;
/// Titles released before this year count as old.
const OLD_MOVIE_CUTOFF: f64 = 1970.0;
/// Bonus when any favorite genre matches.
const FAVORITE_GENRE_BONUS: f64 = 3.5;

/// Base score of a movie, independent of any user.
///
/// `2.3 * imdb_score - title_year / 2000`, plus 1.5 if the genre string
/// mentions Sci-Fi or Adventure. Missing or non-numeric rating and year
/// fields are hard errors.
pub fn fractal_score(record: &MovieRecord) -> Result<f64> {
    let rating = record.imdb_score()?;
    let year = record.title_year()?;
    let genre_bonus = if scifi_or_adventure(record.genres()) {
        SCIFI_ADVENTURE_BONUS
    } else {
        0.0
    };
    Ok(RATING_WEIGHT * rating - year / YEAR_DIVISOR + genre_bonus)
}

/// Personalized score: the fractal score plus a 2.5 bonus for pre-1970
/// titles when the user likes old movies and a 3.5 bonus when any of the
/// user's favorite genres matches the movie's genre string.
pub fn user_score(record: &MovieRecord, user: &UserProfile) -> Result<f64> {
    let mut score = fractal_score(record)?;
    if user.likes_old_movies && record.title_year()? < OLD_MOVIE_CUTOFF {
        score += OLD_MOVIE_BONUS;
    }
    if matches_favorite_genre(record.genres(), user) {
        score += FAVORITE_GENRE_BONUS;
    }
    Ok(score)
}

fn scifi_or_adventure(genres: &str) -> bool {
    genres.contains("Sci-Fi") || genres.contains("Adventure")
}

fn matches_favorite_genre(genres: &str, user: &UserProfile) -> bool {
    user.favorites().any(|favorite| genres.contains(favorite))
}
