// ABOUTME: SQLite store implementation
// ABOUTME: Wraps the database module to implement the DatabaseProvider trait

//! SQLite store implementation

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::DatabaseProvider;
use crate::models::{ExerciseEntry, User};

/// SQLite store implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteDatabase {
    /// Get a reference to the inner database
    #[must_use]
    pub const fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        self.inner.create_user(user).await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        self.inner.get_user(user_id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.inner.get_user_by_username(username).await
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        self.inner.get_users().await
    }

    async fn create_exercise(&self, entry: &ExerciseEntry) -> Result<Uuid> {
        self.inner.create_exercise(entry).await
    }

    async fn get_user_exercises(&self, user_id: Uuid) -> Result<Vec<ExerciseEntry>> {
        self.inner.get_user_exercises(user_id).await
    }
}
