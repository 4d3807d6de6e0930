//! Personalized scoring and top-N ranking over the movie catalog.
//!
//! This crate provides:
//! - UserProfile, the preference inputs for personalization
//! - Scoring formulas (fractal score, user score)
//! - RankingEngine for producing sorted top-N results
//!
//! ## Architecture
//! A ranking request flows in three steps:
//! 1. The engine requests the record set through the shared catalog
//!    (parsed once, cached for the process lifetime)
//! 2. Every record gets a derived user score
//! 3. Records are stable-sorted descending and truncated to the limit
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::MovieCatalog;
//! use ranking::{RankingEngine, UserProfile};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(MovieCatalog::new());
//! let engine = RankingEngine::new(catalog, "movie_metadata.csv");
//!
//! let user = UserProfile::new(true, "Action|Sci-Fi|Drama");
//! for movie in engine.top10(&user)? {
//!     println!("{} {:.2}", movie.movie_title, movie.user_specific_score);
//! }
//! ```

pub mod profile;
pub mod rank;
pub mod scoring;

// Re-export main types
pub use profile::UserProfile;
pub use rank::{RankedMovie, RankingEngine};
pub use scoring::{fractal_score, user_score};
