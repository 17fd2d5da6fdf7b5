// ABOUTME: Configuration module for the exercise tracker service
// ABOUTME: Environment-only configuration, no config files

//! Configuration management
//!
//! All configuration comes from environment variables; there is no config
//! file layer. See [`environment::ServerConfig::from_env`].

/// Environment-based configuration
pub mod environment;

pub use environment::ServerConfig;
