// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Holds the shared store handle and configuration for all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. The store
//! handle is injected rather than living in a process-wide global, so
//! tests can stand up isolated instances.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;

/// Centralized resource container for dependency injection
///
/// Holds all shared server resources so routes never recreate expensive
/// objects or reach for ambient globals.
#[derive(Clone)]
pub struct ServerResources {
    /// Store handle, shared across all requests
    pub database: Arc<Database>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }
}
