//! CLI administration tool for shortlink.
//!
//! Creates and inspects links directly against the configured database, and
//! exposes the identifier codec for debugging short URLs.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (runs the same reachability check as the HTTP service)
//! cargo run --bin admin -- link create https://example.com
//!
//! # Show the record behind a short id
//! cargo run --bin admin -- link show 1a
//! cargo run --bin admin -- link show 1a --json
//!
//! # Translate between ids and short identifiers
//! cargo run --bin admin -- codec encode 46656
//! cargo run --bin admin -- codec decode 1000
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): required by `link` and `db` commands

use shortlink::application::services::LinkService;
use shortlink::config::{self, Config, mask_connection_string};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::infrastructure::validation::HttpUrlValidator;
use shortlink::utils::id_codec;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create and inspect links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Convert between numeric ids and short identifiers
    Codec {
        #[command(subcommand)]
        action: CodecAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// The URL to shorten
        url: String,

        /// Store the URL without fetching it first
        #[arg(long)]
        skip_validation: bool,
    },

    /// Show the record behind a short identifier
    Show {
        /// Short identifier, e.g. `1a`
        short_id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Codec subcommands.
#[derive(Subcommand)]
enum CodecAction {
    /// Numeric id to short identifier
    Encode { id: i64 },

    /// Short identifier to numeric id
    Decode { short_id: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Codec { action } => handle_codec_action(action),
        Commands::Link { action } => {
            let (config, pool) = connect().await?;
            handle_link_action(action, &config, pool).await
        }
        Commands::Db { action } => {
            let (_, pool) = connect().await?;
            handle_db_action(action, &pool).await
        }
    }
}

/// Loads configuration and connects to the configured database.
async fn connect() -> Result<(Config, PgPool)> {
    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok((config, pool))
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: PgPool) -> Result<()> {
    let repo: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let validator = HttpUrlValidator::new(
        Duration::from_secs(config.validation_timeout_seconds),
        config.validation_policy,
    )?;
    let service = LinkService::new(repo, Arc::new(validator));

    match action {
        LinkAction::Create {
            url,
            skip_validation,
        } => create_link(&service, &url, skip_validation).await,
        LinkAction::Show { short_id, json } => show_link(&service, &short_id, json).await,
    }
}

/// Creates a link and prints its short identifier.
async fn create_link(service: &LinkService, url: &str, skip_validation: bool) -> Result<()> {
    println!("{}", "Create short link".bright_blue().bold());
    println!();

    let result = if skip_validation {
        println!("{}", "  Skipping reachability check".yellow());
        service.create_unchecked(url).await
    } else {
        service.create(url).await
    };

    let short_id = result.map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("  URL:      {}", url.cyan());
    println!("  Short id: {}", short_id.bright_yellow().bold());
    println!(
        "  Id:       {}",
        id_codec::decode(&short_id)?.to_string().bright_black()
    );
    println!();
    println!("{}", "Link created".green().bold());

    Ok(())
}

/// Prints the stored record for a short identifier.
async fn show_link(service: &LinkService, short_id: &str, json: bool) -> Result<()> {
    let id = id_codec::decode(short_id)
        .with_context(|| format!("'{}' is not a short identifier", short_id))?;

    let link = service
        .find(id)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&link)?);
        return Ok(());
    }

    println!("{}", "Short link".bright_blue().bold());
    println!();
    println!("  Short id: {}", link.short_id().bright_yellow());
    println!("  Id:       {}", link.id.to_string().bright_black());
    println!("  URL:      {}", link.path.cyan());
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Runs the identifier codec.
fn handle_codec_action(action: CodecAction) -> Result<()> {
    match action {
        CodecAction::Encode { id } => {
            if id < 0 {
                anyhow::bail!("ids are never negative, got {}", id);
            }
            println!("{}", id_codec::encode(id));
        }
        CodecAction::Decode { short_id } => {
            let id = id_codec::decode(&short_id)
                .with_context(|| format!("'{}' is not a short identifier", short_id))?;
            println!("{}", id);
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let repo = PgLinkRepository::new(Arc::new(pool.clone()));
            if !repo.health_check().await {
                anyhow::bail!("Database did not answer a trivial query");
            }

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let repo = PgLinkRepository::new(Arc::new(pool.clone()));
            let links = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
