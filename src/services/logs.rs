// ABOUTME: Log query engine: date-range filtering, sorting, and truncation of exercise logs
// ABOUTME: The one nontrivial component; count is total volume, not filtered page size
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log query engine
//!
//! Reads every entry for a user from the store, then filters, sorts, and
//! truncates in memory:
//!
//! 1. `count` is fixed to the TOTAL number of entries for the user, before
//!    the date filter and the limit are applied. It reflects total log
//!    volume, not the filtered page size.
//! 2. The optional `from`/`to` bounds form a [`DateRange`]; values that do
//!    not match `YYYY-MM-DD` exactly are silently ignored.
//! 3. Surviving entries are sorted ascending by date; the sort is stable,
//!    so entries with equal dates keep their insertion order.
//! 4. A positive `limit` keeps the earliest dates; anything else means no
//!    truncation.

use chrono::NaiveDate;

use super::users;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::AppResult;
use crate::models::{parse_filter_date, ExerciseEntry, User};

/// Date-range filter over calendar dates, both bounds inclusive
///
/// The four query cases as a discriminated variant, evaluated per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// No bounds: every entry matches
    Unbounded,
    /// Entries on or after the given date
    From(NaiveDate),
    /// Entries on or before the given date
    Until(NaiveDate),
    /// Entries between the two dates, inclusive
    Between(NaiveDate, NaiveDate),
}

impl DateRange {
    /// Build a range from raw query values
    ///
    /// Values that do not match `YYYY-MM-DD` exactly are treated as absent
    /// bounds; this leniency is part of the API contract.
    #[must_use]
    pub fn from_query(from: Option<&str>, to: Option<&str>) -> Self {
        let from = from.and_then(parse_filter_date);
        let to = to.and_then(parse_filter_date);

        match (from, to) {
            (None, None) => Self::Unbounded,
            (Some(from), None) => Self::From(from),
            (None, Some(to)) => Self::Until(to),
            (Some(from), Some(to)) => Self::Between(from, to),
        }
    }

    /// Whether the given calendar date falls inside the range
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        match self {
            Self::Unbounded => true,
            Self::From(from) => date >= from,
            Self::Until(to) => date <= to,
            Self::Between(from, to) => date >= from && date <= to,
        }
    }
}

/// Parse a raw limit value leniently
///
/// Only a positive integer truncates; zero, negative, absent, or
/// non-numeric values all mean "no truncation".
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| *n > 0)
}

/// Query envelope: the user's identity, total entry count, and the
/// filtered log entries
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    /// The user the logs belong to
    pub user: User,
    /// Total number of entries for the user, before filter and limit
    pub count: usize,
    /// Filtered entries, ascending by date
    pub entries: Vec<ExerciseEntry>,
}

/// Query a user's exercise log with optional date bounds and limit
///
/// Read-only; no side effects.
///
/// # Errors
///
/// Returns a not-found error for an unknown user id, or a store error if
/// the read fails.
pub async fn query_logs(
    database: &Database,
    raw_user_id: &str,
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<&str>,
) -> AppResult<ExerciseLog> {
    let user = users::get_user_required(database, raw_user_id).await?;

    let all_entries = database.get_user_exercises(user.id).await?;
    // Total log volume, fixed before any filtering
    let count = all_entries.len();

    let range = DateRange::from_query(from, to);
    let mut entries: Vec<ExerciseEntry> = all_entries
        .into_iter()
        .filter(|entry| range.contains(entry.date))
        .collect();

    // Stable sort: equal dates keep insertion order
    entries.sort_by_key(|entry| entry.date);

    if let Some(limit) = parse_limit(limit) {
        entries.truncate(limit);
    }

    Ok(ExerciseLog {
        user,
        count,
        entries,
    })
}
