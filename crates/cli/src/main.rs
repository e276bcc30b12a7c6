use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{load_movies, LoaderConfig, Movie, DEFAULT_DATA_SOURCE};
use pipeline::{MovieRecommender, DEFAULT_TOP_K};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod interface;

use interface::Interface;

/// ReelRecs - "more like this" movie recommendations
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Recommend movies similar to a given title", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV
    #[arg(short, long, default_value = DEFAULT_DATA_SOURCE)]
    data_source: PathBuf,

    /// Log filter (e.g. "info", "debug", "pipeline=debug"); falls back to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive {
        /// Number of recommendations per query
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        limit: usize,
    },

    /// Recommend movies similar to one title and exit
    Recommend {
        /// Exact title of the movie to compare against
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        limit: usize,

        /// Show the similarity score for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = LoaderConfig::new(cli.data_source);
    let start = Instant::now();
    let movies = load_movies(&config)
        .with_context(|| format!("Failed to load catalog from {}", config.data_source.display()))?;
    tracing::info!("Loaded {} movies in {:?}", movies.len(), start.elapsed());

    let recommender = MovieRecommender::new(movies)?;

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Interactive { limit: DEFAULT_TOP_K }) {
        Commands::Interactive { limit } => handle_interactive(&recommender, limit)?,
        Commands::Recommend {
            title,
            limit,
            explain,
        } => handle_recommend(&recommender, &title, limit, explain)?,
        Commands::Search { title } => handle_search(&recommender, &title),
    }

    Ok(())
}

/// Handle the 'interactive' command
fn handle_interactive(recommender: &MovieRecommender, limit: usize) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Interface::new(recommender, limit, stdin.lock(), stdout.lock()).run()
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: &MovieRecommender,
    title: &str,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let start = Instant::now();
    let recommendations = recommender.recommend_scored(title, limit)?;
    tracing::debug!("Query answered in {:?}", start.elapsed());

    println!("{}", format!("Movies similar to '{}':", title).bold().blue());
    for (rank, rec) in recommendations.iter().enumerate() {
        if explain {
            println!(
                "{}. {} - Similarity: {:.3}",
                (rank + 1).to_string().green(),
                rec.title,
                rec.score
            );
        } else {
            println!("{}. {}", (rank + 1).to_string().green(), rec.title);
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(recommender: &MovieRecommender, title: &str) {
    let needle = title.to_lowercase();

    // (relevance, movie): exact matches first, then substring matches
    let mut matches: Vec<(u8, &Movie)> = recommender
        .movies()
        .iter()
        .filter_map(|movie| {
            let haystack = movie.title.to_lowercase();
            if haystack == needle {
                Some((0, movie))
            } else if haystack.contains(&needle) {
                Some((1, movie))
            } else {
                None
            }
        })
        .collect();
    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.title.cmp(&b.1.title)));

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("{}", "No matching titles".yellow());
    }
    for (_, movie) in matches.iter().take(20) {
        let genres = movie.genre_list().collect::<Vec<_>>().join(", ");
        println!(
            "{}{} ({}) {}",
            "• ".green(),
            movie.title,
            movie.release_year(),
            format!("[{}]", genres).dimmed()
        );
    }
}
