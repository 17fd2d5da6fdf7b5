// ABOUTME: User database operations
// ABOUTME: Handles user insertion and lookup by id or exact username

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::models::User;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// The UNIQUE constraint on `username` is the store-level backstop for
    /// the check-then-create race; a concurrent duplicate insert fails here
    /// rather than producing a second row.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is already taken or the insert
    /// fails.
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Get a user by exact username match
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT id, username, created_at FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Get all users in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, created_at FROM users ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
    let id: String = row.try_get("id")?;
    let username: String = row.try_get("username")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| anyhow!("Invalid user id in database: {e}"))?,
        username,
        created_at,
    })
}
