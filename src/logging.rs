// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels, formatters, and output destinations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging configuration
//!
//! Production deployments get JSON output; everything else gets the
//! human-readable compact format. `RUST_LOG` overrides the configured
//! level when set.

use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::environment::ServerConfig;
use crate::constants::service_info;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Compact format for development
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Derive logging configuration from the server configuration
    #[must_use]
    pub fn from_server_config(config: &ServerConfig) -> Self {
        let format = if config.environment.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Compact
        };
        Self {
            level: config.log_level.to_string(),
            format,
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber was already installed.
    pub fn init(&self) -> Result<()> {
        // RUST_LOG wins when set; noise reduction applies either way
        let env_filter = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "sqlx=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "tower_http=info"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
            .add_directive(
                format!("{}={}", service_info::SERVICE_NAME.replace('-', "_"), self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                registry
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_writer(io::stdout),
                    )
                    .try_init()?;
            }
            LogFormat::Compact => {
                registry
                    .with(
                        fmt::layer()
                            .compact()
                            .with_target(true)
                            .with_writer(io::stdout),
                    )
                    .try_init()?;
            }
        }

        Ok(())
    }
}

/// Initialize logging from the server configuration
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub fn init(config: &ServerConfig) -> Result<()> {
    LoggingConfig::from_server_config(config).init()
}
