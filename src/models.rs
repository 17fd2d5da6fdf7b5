// ABOUTME: Core data models for the exercise tracker service
// ABOUTME: Defines User, ExerciseEntry, and calendar-date parsing and rendering helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Core data structures shared by the store adapter, service layer, and
//! HTTP routes.
//!
//! ## Design Principles
//!
//! - **Day granularity**: exercise dates are calendar dates. Every inbound
//!   date string is normalized to a [`chrono::NaiveDate`] at the boundary
//!   before any comparison takes place.
//! - **Opaque identifiers**: ids are store-generated UUIDs with no meaning
//!   beyond identity.
//! - **Immutable records**: users and exercise entries are never mutated
//!   after creation.

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;

use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier, generated at creation
    pub id: Uuid,
    /// Unique username, exact-match lookup key
    pub username: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh user with a newly generated id
    #[must_use]
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            created_at: Utc::now(),
        }
    }
}

/// A single exercise log entry tied to a user
///
/// `user_id` is a lookup key, not an enforced ownership relation; entries
/// are only ever created against an existing user and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Opaque identifier
    pub id: Uuid,
    /// Foreign reference to [`User::id`]
    pub user_id: Uuid,
    /// Non-empty free-text description
    pub description: String,
    /// Duration in minutes, always positive
    pub duration_minutes: i64,
    /// Calendar date of the exercise
    pub date: NaiveDate,
    /// Creation timestamp, preserves insertion order for equal dates
    pub created_at: DateTime<Utc>,
}

/// Strict `YYYY-MM-DD` shape gate for log filter dates
// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static FILTER_DATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Render a calendar date in the fixed human-readable log format
///
/// Example: `2024-01-01` renders as `Mon Jan 01 2024`.
#[must_use]
pub fn format_log_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Parse a supplied exercise date
///
/// # Errors
///
/// Returns an `INVALID_FORMAT` error if the value is not a valid
/// `YYYY-MM-DD` calendar date.
pub fn parse_exercise_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::invalid_format(error_messages::DATE_INVALID).with_source(e))
}

/// Parse a log filter date leniently
///
/// Any value that does not match `YYYY-MM-DD` exactly (or names an
/// impossible date) yields `None` and is treated as an absent bound. This
/// is the documented leniency policy, not an error path.
#[must_use]
pub fn parse_filter_date(raw: &str) -> Option<NaiveDate> {
    let shape_ok = FILTER_DATE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(raw));
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
