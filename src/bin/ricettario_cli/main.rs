// ABOUTME: Ricettario CLI - recipe listing, nutrition analysis and catalog match probing
// ABOUTME: Reads the exported recipe and food-table collections from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List every recipe
//! ricettario list
//!
//! # Show one recipe with its ingredient map
//! ricettario show 12
//!
//! # Compute nutrition for a recipe
//! ricettario analyze 12
//!
//! # Same, as JSON with full precision
//! ricettario analyze 12 --format json
//!
//! # See which catalog entry an ingredient name resolves to
//! ricettario match "uova fresche"
//!
//! # Use other exports
//! ricettario --catalog exports/alimenti.json --recipes exports/ricette.json list
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ricettario::{config::AppConfig, logging::LoggingConfig, service::NutritionService};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "ricettario",
    about = "Ricettario recipe nutrition calculator",
    long_about = "Computes calories and nutrients for stored recipes by matching each ingredient against a nutrition reference table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference catalog JSON export (overrides RICETTARIO_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Recipe collection JSON export (overrides RICETTARIO_RECIPES_PATH)
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List every recipe
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Show one recipe
    Show {
        /// Recipe id
        id: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Compute nutrition totals for a recipe
    Analyze {
        /// Recipe id
        id: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Show how an ingredient name resolves against the catalog
    Match {
        /// Ingredient name as written in a recipe
        name: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    // Load configuration; flags win over the environment
    let mut config = AppConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config = config.with_catalog_path(path);
    }
    if let Some(path) = cli.recipes {
        config = config.with_recipes_path(path);
    }
    info!(
        catalog = %config.catalog_path.display(),
        recipes = %config.recipes_path.display(),
        "Ricettario CLI"
    );

    let service = NutritionService::from_config(&config);

    match cli.command {
        Command::List { format } => commands::recipes::list(&service, &format).await?,
        Command::Show { id, format } => commands::recipes::show(&service, &id, &format).await?,
        Command::Analyze { id, format } => {
            commands::analyze::analyze(&service, &id, &format).await?;
        }
        Command::Match { name, format } => {
            commands::probe::probe(&service, &name, &format).await?;
        }
    }

    Ok(())
}
