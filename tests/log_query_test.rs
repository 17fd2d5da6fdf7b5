// ABOUTME: Service-level tests for the log query engine
// ABOUTME: Covers count invariance, filter monotonicity, stable sorting, and truncation

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use exercise_tracker::database_plugins::{factory::Database, DatabaseProvider};
use exercise_tracker::models::{ExerciseEntry, User};
use exercise_tracker::services::logs;

async fn test_db() -> Database {
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

async fn seed_user(db: &Database, username: &str) -> User {
    let user = User::new(username.into());
    db.create_user(&user).await.expect("Failed to create user");
    user
}

async fn seed_exercise(db: &Database, user: &User, description: &str, date: (i32, u32, u32)) {
    let entry = ExerciseEntry {
        id: Uuid::new_v4(),
        user_id: user.id,
        description: description.into(),
        duration_minutes: 30,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("invalid test date"),
        created_at: Utc::now(),
    };
    db.create_exercise(&entry)
        .await
        .expect("Failed to create exercise");
}

fn descriptions(log: &logs::ExerciseLog) -> Vec<&str> {
    log.entries
        .iter()
        .map(|entry| entry.description.as_str())
        .collect()
}

#[tokio::test]
async fn test_count_is_invariant_to_filters_and_limit() {
    let db = test_db().await;
    let user = seed_user(&db, "alice").await;
    seed_exercise(&db, &user, "run", (2024, 1, 1)).await;
    seed_exercise(&db, &user, "swim", (2024, 1, 10)).await;
    seed_exercise(&db, &user, "yoga", (2024, 2, 1)).await;
    let user_id = user.id.to_string();

    let queries: &[(Option<&str>, Option<&str>, Option<&str>)] = &[
        (None, None, None),
        (Some("2024-01-05"), None, None),
        (None, Some("2024-01-05"), None),
        (Some("2024-01-01"), Some("2024-01-31"), None),
        (Some("2030-01-01"), None, None),
        (None, None, Some("1")),
        (Some("2024-01-05"), None, Some("1")),
    ];

    for (from, to, limit) in queries {
        let log = logs::query_logs(&db, &user_id, *from, *to, *limit)
            .await
            .expect("query failed");
        assert_eq!(
            log.count, 3,
            "count must stay total for from={from:?} to={to:?} limit={limit:?}"
        );
    }
}

#[tokio::test]
async fn test_widening_the_range_never_drops_entries() {
    let db = test_db().await;
    let user = seed_user(&db, "alice").await;
    seed_exercise(&db, &user, "run", (2024, 1, 1)).await;
    seed_exercise(&db, &user, "swim", (2024, 1, 10)).await;
    seed_exercise(&db, &user, "yoga", (2024, 2, 1)).await;
    let user_id = user.id.to_string();

    let narrow = logs::query_logs(&db, &user_id, Some("2024-01-05"), Some("2024-01-15"), None)
        .await
        .expect("query failed");
    let wide = logs::query_logs(&db, &user_id, Some("2024-01-01"), Some("2024-02-01"), None)
        .await
        .expect("query failed");
    let unbounded = logs::query_logs(&db, &user_id, None, None, None)
        .await
        .expect("query failed");

    for entry in &narrow.entries {
        assert!(
            wide.entries.iter().any(|e| e.id == entry.id),
            "entry {} lost when widening",
            entry.description
        );
    }
    for entry in &wide.entries {
        assert!(
            unbounded.entries.iter().any(|e| e.id == entry.id),
            "entry {} lost when removing bounds",
            entry.description
        );
    }

    assert_eq!(descriptions(&narrow), vec!["swim"]);
    assert_eq!(descriptions(&wide), vec!["run", "swim", "yoga"]);
}

#[tokio::test]
async fn test_output_is_sorted_ascending_by_date() {
    let db = test_db().await;
    let user = seed_user(&db, "alice").await;
    // Inserted out of date order
    seed_exercise(&db, &user, "yoga", (2024, 2, 1)).await;
    seed_exercise(&db, &user, "run", (2024, 1, 1)).await;
    seed_exercise(&db, &user, "swim", (2024, 1, 10)).await;

    let log = logs::query_logs(&db, &user.id.to_string(), None, None, None)
        .await
        .expect("query failed");

    assert_eq!(descriptions(&log), vec!["run", "swim", "yoga"]);
    let mut dates = log.entries.iter().map(|e| e.date);
    let first = dates.next().expect("no entries");
    dates.fold(first, |prev, next| {
        assert!(prev <= next, "dates must be non-decreasing");
        next
    });
}

#[tokio::test]
async fn test_equal_dates_keep_insertion_order() {
    let db = test_db().await;
    let user = seed_user(&db, "alice").await;
    seed_exercise(&db, &user, "first", (2024, 1, 5)).await;
    seed_exercise(&db, &user, "second", (2024, 1, 5)).await;
    seed_exercise(&db, &user, "third", (2024, 1, 5)).await;
    seed_exercise(&db, &user, "earlier", (2024, 1, 1)).await;

    let log = logs::query_logs(&db, &user.id.to_string(), None, None, None)
        .await
        .expect("query failed");

    assert_eq!(
        descriptions(&log),
        vec!["earlier", "first", "second", "third"]
    );
}

#[tokio::test]
async fn test_limit_truncates_to_earliest_of_filtered_set() {
    let db = test_db().await;
    let user = seed_user(&db, "alice").await;
    seed_exercise(&db, &user, "run", (2024, 1, 1)).await;
    seed_exercise(&db, &user, "swim", (2024, 1, 10)).await;
    seed_exercise(&db, &user, "yoga", (2024, 2, 1)).await;
    let user_id = user.id.to_string();

    let log = logs::query_logs(&db, &user_id, None, None, Some("2"))
        .await
        .expect("query failed");
    assert_eq!(descriptions(&log), vec!["run", "swim"]);

    // Limit applies after the range filter
    let log = logs::query_logs(&db, &user_id, Some("2024-01-05"), None, Some("1"))
        .await
        .expect("query failed");
    assert_eq!(descriptions(&log), vec!["swim"]);

    // A limit larger than the filtered set is a no-op
    let log = logs::query_logs(&db, &user_id, None, None, Some("100"))
        .await
        .expect("query failed");
    assert_eq!(log.entries.len(), 3);
}

#[tokio::test]
async fn test_logs_are_scoped_to_the_queried_user() {
    let db = test_db().await;
    let alice = seed_user(&db, "alice").await;
    let bob = seed_user(&db, "bob").await;
    seed_exercise(&db, &alice, "run", (2024, 1, 1)).await;
    seed_exercise(&db, &bob, "lift", (2024, 1, 2)).await;
    seed_exercise(&db, &bob, "row", (2024, 1, 3)).await;

    let log = logs::query_logs(&db, &alice.id.to_string(), None, None, None)
        .await
        .expect("query failed");
    assert_eq!(log.count, 1);
    assert_eq!(descriptions(&log), vec!["run"]);
    assert_eq!(log.user.username, "alice");
}

#[tokio::test]
async fn test_unknown_user_is_a_not_found_error() {
    let db = test_db().await;

    let result = logs::query_logs(&db, &Uuid::new_v4().to_string(), None, None, None).await;
    let error = result.expect_err("expected not-found error");
    assert_eq!(error.message, "User not found!");

    let result = logs::query_logs(&db, "not-a-uuid", None, None, None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_empty_log_for_user_with_no_entries() {
    let db = test_db().await;
    let user = seed_user(&db, "alice").await;

    let log = logs::query_logs(&db, &user.id.to_string(), None, None, None)
        .await
        .expect("query failed");
    assert_eq!(log.count, 0);
    assert!(log.entries.is_empty());
}
