// ABOUTME: Data store abstraction layer for the exercise tracker
// ABOUTME: Plugin architecture so the service layer is agnostic of the storage backend

//! Store adapter interface
//!
//! The service layer talks to the store only through [`DatabaseProvider`]:
//! insert and find operations over the two collections (users and
//! exercises). Any backend that implements this trait can sit behind the
//! HTTP API; this build bundles SQLite.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{ExerciseEntry, User};

pub mod factory;
pub mod sqlite;

/// Core store abstraction trait
///
/// All store implementations must implement this trait to provide a
/// consistent interface to the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new store connection and run migrations
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run migrations to set up the schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Users collection
    // ================================

    /// Insert a new user
    async fn create_user(&self, user: &User) -> Result<Uuid>;

    /// Find a user by id
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Find a user by exact username match
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Find all users
    async fn get_users(&self) -> Result<Vec<User>>;

    // ================================
    // Exercises collection
    // ================================

    /// Insert a new exercise entry
    async fn create_exercise(&self, entry: &ExerciseEntry) -> Result<Uuid>;

    /// Find all exercise entries for a user, in insertion order
    async fn get_user_exercises(&self, user_id: Uuid) -> Result<Vec<ExerciseEntry>>;
}
