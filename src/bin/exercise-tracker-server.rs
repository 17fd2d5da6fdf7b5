// ABOUTME: Server binary for the exercise tracker HTTP API
// ABOUTME: Loads configuration, initializes the store, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Exercise Tracker Server Binary
//!
//! Starts the exercise tracker HTTP API with environment-based
//! configuration and a SQLite-backed store.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use exercise_tracker::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    resources::ServerResources,
    server::HttpServer,
};

#[derive(Parser)]
#[command(name = "exercise-tracker-server")]
#[command(about = "Exercise Tracker - HTTP API for users and exercise logs")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args {
                http_port: None,
                database_url: None,
            }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }

    logging::init(&config)?;

    info!("Starting Exercise Tracker HTTP API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized successfully: {}", database.backend_info());

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    HttpServer::new(resources).run(http_port).await
}
