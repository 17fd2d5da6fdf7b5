// ABOUTME: Store factory and backend detection from connection strings
// ABOUTME: Provides a unified Database wrapper delegating to the selected implementation

//! Store factory
//!
//! Detects the backend from the connection string and constructs the
//! matching [`DatabaseProvider`] implementation.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use super::sqlite::SqliteDatabase;
use super::DatabaseProvider;
use crate::models::{ExerciseEntry, User};

/// Supported store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Embedded SQLite database
    SQLite,
    /// PostgreSQL (recognized, but not compiled into this build)
    PostgreSQL,
}

/// Store instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// SQLite-backed store
    SQLite(SqliteDatabase),
}

impl Database {
    /// Get a descriptive string for the current store backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (embedded)",
        }
    }

    /// Get the store type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }
}

/// Detect the store backend from a connection string
///
/// # Errors
///
/// Returns an error if the URL scheme is not recognized.
fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else if database_url.starts_with("postgresql://") || database_url.starts_with("postgres://") {
        Ok(DatabaseType::PostgreSQL)
    } else {
        Err(anyhow!("Unsupported database URL format: {database_url}"))
    }
}

#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteDatabase::new(database_url).await?;
                Ok(Self::SQLite(db))
            }
            DatabaseType::PostgreSQL => Err(anyhow!(
                "PostgreSQL support is not compiled into this build"
            )),
        }
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
        }
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        match self {
            Self::SQLite(db) => db.create_user(user).await,
        }
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        match self {
            Self::SQLite(db) => db.get_user(user_id).await,
        }
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        match self {
            Self::SQLite(db) => db.get_user_by_username(username).await,
        }
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        match self {
            Self::SQLite(db) => db.get_users().await,
        }
    }

    async fn create_exercise(&self, entry: &ExerciseEntry) -> Result<Uuid> {
        match self {
            Self::SQLite(db) => db.create_exercise(entry).await,
        }
    }

    async fn get_user_exercises(&self, user_id: Uuid) -> Result<Vec<ExerciseEntry>> {
        match self {
            Self::SQLite(db) => db.get_user_exercises(user_id).await,
        }
    }
}
