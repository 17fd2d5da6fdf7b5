// ABOUTME: Exercise entry database operations
// ABOUTME: Handles entry insertion and per-user retrieval in insertion order

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::models::ExerciseEntry;

impl Database {
    /// Create the exercises table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_exercises(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                description TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                date TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user_id ON exercises(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new exercise entry
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_exercise(&self, entry: &ExerciseEntry) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO exercises (id, user_id, description, duration_minutes, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(&entry.description)
        .bind(entry.duration_minutes)
        .bind(entry.date)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry.id)
    }

    /// Get all exercise entries for a user, in insertion order
    ///
    /// Insertion order is the tie-break the log query relies on when
    /// sorting entries with equal dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_user_exercises(&self, user_id: Uuid) -> Result<Vec<ExerciseEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, description, duration_minutes, date, created_at
            FROM exercises
            WHERE user_id = $1
            ORDER BY rowid ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }
}

fn row_to_exercise(row: &SqliteRow) -> Result<ExerciseEntry> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let description: String = row.try_get("description")?;
    let duration_minutes: i64 = row.try_get("duration_minutes")?;
    let date: NaiveDate = row.try_get("date")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(ExerciseEntry {
        id: Uuid::parse_str(&id).map_err(|e| anyhow!("Invalid exercise id in database: {e}"))?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| anyhow!("Invalid user id in database: {e}"))?,
        description,
        duration_minutes,
        date,
        created_at,
    })
}
