// ABOUTME: Exercise recorder business logic
// ABOUTME: Validates and appends exercise entries against an existing user
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::users;
use crate::constants::error_messages;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::{AppError, AppResult};
use crate::models::{parse_exercise_date, ExerciseEntry, User};

/// Validate and record a single exercise entry for a user
///
/// `duration` and `date` arrive as the raw form strings so malformed input
/// becomes a domain validation error rather than a framework rejection.
/// An absent or empty `date` defaults to the current UTC date.
///
/// # Errors
///
/// Returns a not-found error for an unknown user id, a validation error
/// for an empty description, non-positive or non-numeric duration, or an
/// unparseable date, and a store error if the insert fails.
pub async fn record_exercise(
    database: &Database,
    raw_user_id: &str,
    description: &str,
    duration: &str,
    date: Option<&str>,
) -> AppResult<(User, ExerciseEntry)> {
    let user = users::get_user_required(database, raw_user_id).await?;

    if description.is_empty() {
        return Err(AppError::missing_field(error_messages::DESCRIPTION_REQUIRED));
    }

    let duration_minutes = parse_duration(duration)?;

    let date = match date {
        Some(raw) if !raw.is_empty() => parse_exercise_date(raw)?,
        _ => Utc::now().date_naive(),
    };

    let entry = ExerciseEntry {
        id: Uuid::new_v4(),
        user_id: user.id,
        description: description.to_owned(),
        duration_minutes,
        date,
        created_at: Utc::now(),
    };
    database.create_exercise(&entry).await?;
    info!(user_id = %user.id, exercise_id = %entry.id, "recorded exercise entry");

    Ok((user, entry))
}

/// Parse a duration form value into positive minutes
fn parse_duration(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| AppError::invalid_input(error_messages::DURATION_INVALID))
}
