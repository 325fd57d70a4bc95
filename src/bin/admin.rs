//! CLI administration tool for alias-shortener.
//!
//! Manages alias mappings and checks the database without going through the
//! HTTP API. Every link command runs through the same services as the server,
//! so validation and error messages match the API.
//!
//! # Usage
//!
//! ```bash
//! # Map a URL to an alias (generated if --alias is omitted)
//! cargo run --bin admin -- link create https://openai.com --alias oai
//!
//! # Show the record behind an alias
//! cargo run --bin admin -- link show oai
//!
//! # Delete an alias
//! cargo run --bin admin -- link delete oai
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `REDIS_URL` (or `REDIS_*` components): cache invalidated by `link delete`
//! - `ALIAS_LENGTH`: generated alias length

use alias_shortener::application::services::{
    DeletionService, ResolutionService, ShorteningService,
};
use alias_shortener::config::{self, Config, mask_connection_string};
use alias_shortener::infrastructure::persistence::PgUrlStore;
use alias_shortener::server::{connect_cache, connect_pool};
use alias_shortener::utils::alias_generator::AliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
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
    /// Manage alias mappings
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Map a URL to an alias
    Create {
        /// Target URL
        url: String,

        /// Alias to claim (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the record behind an alias
    Show { alias: String },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_* components) must be set")?;

    let pool = connect_pool(&config, &database_url).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: PgPool) -> Result<()> {
    let store = Arc::new(PgUrlStore::new(Arc::new(pool)));

    match action {
        LinkAction::Create { url, alias } => {
            let service = ShorteningService::new(
                store,
                Arc::new(AliasGenerator::from_os_rng()),
                config.alias_length,
            );
            create_link(&service, &url, alias.as_deref()).await?;
        }
        LinkAction::Show { alias } => {
            show_link(&store, &alias).await?;
        }
        LinkAction::Delete { alias, yes } => {
            let resolver = ResolutionService::new(store.clone());
            let deleter = DeletionService::new(store, connect_cache(config).await);
            delete_link(&resolver, &deleter, &alias, yes).await?;
        }
    }

    Ok(())
}

async fn create_link(service: &ShorteningService, url: &str, alias: Option<&str>) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let shortened = service
        .shorten(url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  ID:    {}", shortened.id.to_string().bright_black());
    println!("  Alias: {}", shortened.alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!();

    Ok(())
}

async fn show_link(store: &PgUrlStore, alias: &str) -> Result<()> {
    let link = store
        .find(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get link: {}", e))?
        .ok_or_else(|| anyhow::anyhow!("Failed to get link: url not found"))?;

    println!("  ID:      {}", link.id.to_string().bright_black());
    println!("  Alias:   {}", link.alias.bright_yellow().bold());
    println!("  URL:     {}", link.target_url.cyan());
    println!(
        "  Created: {}",
        link.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );

    Ok(())
}

/// Deletes an alias after showing its target and asking for confirmation
/// (default: No).
async fn delete_link(
    resolver: &ResolutionService,
    deleter: &DeletionService,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let url = resolver
        .resolve(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get link: {}", e))?;

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    deleter
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());
            println!("  {}", mask_connection_string(database_url).bright_black());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Links: {}", links.to_string().bright_green().bold());
        }
    }

    Ok(())
}
