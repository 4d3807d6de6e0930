use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::MovieCatalog;
use ranking::{RankedMovie, RankingEngine, UserProfile};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// FractalRecs - Personalized Movie Ranking
#[derive(Parser)]
#[command(name = "fractal-recs")]
#[command(about = "Personalized movie ranking over a CSV catalog", long_about = None)]
struct Cli {
    /// Path to the movie metadata CSV file
    #[arg(short, long, default_value = "movie_metadata.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the top movies for a user profile
    Rank {
        /// Grant the bonus for movies released before 1970
        #[arg(long)]
        likes_old_movies: bool,

        /// Pipe-delimited favorite genres
        #[arg(long, default_value = "Action|Sci-Fi|Drama")]
        favorite_genres: String,

        /// Number of entries to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one movie and its scores
    Movie {
        /// IMDB title id, e.g. tt0499549
        #[arg(long)]
        id: String,

        /// Grant the bonus for movies released before 1970
        #[arg(long)]
        likes_old_movies: bool,

        /// Pipe-delimited favorite genres
        #[arg(long, default_value = "Action|Sci-Fi|Drama")]
        favorite_genres: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(MovieCatalog::new());
    let engine = RankingEngine::new(catalog.clone(), cli.data.clone());

    match cli.command {
        Commands::Rank {
            likes_old_movies,
            favorite_genres,
            limit,
            json,
        } => {
            let user = UserProfile::new(likes_old_movies, favorite_genres);
            handle_rank(&engine, &user, limit, json)
        }
        Commands::Movie {
            id,
            likes_old_movies,
            favorite_genres,
        } => {
            let user = UserProfile::new(likes_old_movies, favorite_genres);
            handle_movie(&engine, &catalog, &id, &user)
        }
    }
}

/// Handle the 'rank' command
fn handle_rank(engine: &RankingEngine, user: &UserProfile, limit: usize, json: bool) -> Result<()> {
    let start = Instant::now();
    let ranking = engine.top_n(user, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    print_ranking(&ranking);
    println!(
        "\n{} Ranked top {} in {:?}",
        "✓".green(),
        ranking.len(),
        start.elapsed()
    );
    Ok(())
}

/// Handle the 'movie' command
fn handle_movie(
    engine: &RankingEngine,
    catalog: &MovieCatalog,
    id: &str,
    user: &UserProfile,
) -> Result<()> {
    let fractal = engine.fractal_score(id)?;
    let personalized = engine.score_for_user(id, user)?;

    // The engine calls above populated the catalog.
    let record = catalog
        .get(id)
        .ok_or_else(|| anyhow!("No movie with id {id}"))?;

    println!("{}", format!("{} ({})", record.title(), id).bold().blue());
    println!(
        "{}Year: {}",
        "• ".green(),
        record.field("title_year").unwrap_or("unknown")
    );
    println!("{}Genres: {}", "• ".green(), record.genres());
    println!("{}Fractal score: {:.2}", "• ".cyan(), fractal);
    println!("{}User score: {:.2}", "• ".cyan(), personalized);
    Ok(())
}

/// Helper function to format and print a ranking
fn print_ranking(ranking: &[RankedMovie]) {
    println!("{}", "Top movies:".bold().blue());
    for (rank, movie) in ranking.iter().enumerate() {
        println!(
            "{}. {} - Score: {:.2}",
            (rank + 1).to_string().green(),
            movie.movie_title,
            movie.user_specific_score
        );
    }
}
