// ABOUTME: Main library entry point for the exercise tracker service
// ABOUTME: Exposes the HTTP API, service layer, and store adapter modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Exercise Tracker Service
//!
//! A minimal exercise-tracking HTTP API: registers users, records exercise
//! log entries (description, duration, date) against a user, and
//! lists/filters those logs.
//!
//! ## Architecture
//!
//! The server follows a layered architecture:
//! - **Routes**: thin axum handlers projecting service results onto the
//!   wire shapes (`_id` field names are part of the compatibility contract)
//! - **Services**: protocol-agnostic business logic — the user registry,
//!   the exercise recorder, and the log query engine
//! - **Store adapter**: the [`database_plugins::DatabaseProvider`] trait
//!   over insert/find operations, with a bundled SQLite backend
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use exercise_tracker::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Exercise tracker configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Application-wide constants: env vars, defaults, wire-contract messages
pub mod constants;

/// SQLite persistence for users and exercise entries
pub mod database;

/// Store adapter trait, factory, and backends
pub mod database_plugins;

/// Unified error types and HTTP error rendering
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Core domain models and calendar-date helpers
pub mod models;

/// Shared resource container for dependency injection
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly and serving
pub mod server;

/// Domain service layer
pub mod services;
