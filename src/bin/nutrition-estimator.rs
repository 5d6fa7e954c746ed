// ABOUTME: Command-line entry point for the nutrition estimator service
// ABOUTME: Serves the REST API or runs a one-shot calorie lookup printed as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Serve the REST API (reads HTTP_PORT, CALORIE_NINJAS_API_KEY, ...)
//! nutrition-estimator serve
//!
//! # One-shot lookup, remote API first when a key is configured
//! nutrition-estimator lookup 1 cup cooked rice
//!
//! # Catalog only, against a custom dataset
//! nutrition-estimator lookup --offline --catalog ./foods.json banana
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrition_estimator::{
    config::ServerConfig,
    errors::AppError,
    logging::{self, LoggingConfig},
    nutrition::{FoodCatalog, NutritionEstimator},
    resources::ServerResources,
    server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutrition-estimator",
    about = "Calorie estimates from a remote nutrition API with a local catalog fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Fallback catalog path override
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Serve the REST API
    Serve {
        /// Override HTTP port
        #[arg(long)]
        http_port: Option<u16>,
    },

    /// Estimate one food and print the result as JSON
    Lookup {
        /// Free-text food description
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Skip the remote API and use only the local catalog
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subscriber first so configuration loading is logged.
    init_logging(&cli.command)?;

    let mut config = ServerConfig::from_env()?;
    if let Some(catalog) = cli.catalog {
        config.nutrition.fallback_path = catalog;
    }

    match cli.command {
        Command::Serve { http_port } => {
            if let Some(http_port) = http_port {
                config.http_port = http_port;
            }
            run_server(config).await
        }
        Command::Lookup { query, offline } => {
            if offline {
                config.nutrition.api_key = None;
            }
            run_lookup(&config, &query.join(" ")).await
        }
    }
}

/// Install the subscriber matching the subcommand
fn init_logging(command: &Command) -> Result<()> {
    match command {
        Command::Serve { .. } => logging::init_from_env(),
        Command::Lookup { .. } => LoggingConfig::for_cli().init(),
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Starting nutrition estimator");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    info!(
        catalog.entries = resources.estimator.catalog().len(),
        remote.enabled = resources.estimator.remote_enabled(),
        "Estimator ready"
    );

    server::serve(resources).await?;
    Ok(())
}

async fn run_lookup(config: &ServerConfig, query: &str) -> Result<()> {
    let catalog = Arc::new(FoodCatalog::load(&config.nutrition.fallback_path));
    let estimator = NutritionEstimator::from_config(&config.nutrition, catalog)?;

    let estimate = estimator.estimate(query).await.map_err(AppError::from)?;
    println!("{}", serde_json::to_string_pretty(&estimate)?);
    eprintln!("Source: {}", estimate.source.attribution_label());
    Ok(())
}
