//! User preference profile consumed by scoring.

use serde::{Deserialize, Serialize};

/// Preferences that personalize a ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Grants the old-movie bonus to titles released before 1970.
    pub likes_old_movies: bool,
    /// Pipe-delimited genre names, e.g. `Action|Sci-Fi|Drama`.
    pub favorite_genres: String,
}

impl UserProfile {
    pub fn new(likes_old_movies: bool, favorite_genres: impl Into<String>) -> Self {
        Self {
            likes_old_movies,
            favorite_genres: favorite_genres.into(),
        }
    }

    /// Iterate the individual favorite genre names.
    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorite_genres.split('|')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_split_on_pipe() {
        let user = UserProfile::new(false, "Action|Sci-Fi|Drama");
        let favorites: Vec<&str> = user.favorites().collect();
        assert_eq!(favorites, vec!["Action", "Sci-Fi", "Drama"]);
    }

    #[test]
    fn test_single_favorite() {
        let user = UserProfile::new(true, "Drama");
        assert_eq!(user.favorites().count(), 1);
    }
}
