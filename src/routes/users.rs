// ABOUTME: User-facing API routes: registration, exercise recording, and log queries
// ABOUTME: Thin axum handlers projecting service results onto the wire shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User API routes
//!
//! The wire shapes here are a compatibility contract: `_id` field names,
//! the `log` array key, and the flat `{error}` body must not change.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{format_log_date, ExerciseEntry, User};
use crate::resources::ServerResources;
use crate::services;

/// Form payload for user registration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    /// Requested username; absent and empty are equivalent
    #[serde(default)]
    pub username: Option<String>,
}

/// Form payload for recording an exercise
///
/// Every field is kept as a raw string so validation happens in the
/// service layer, not in the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordExerciseRequest {
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<String>,
    /// Optional calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters for the log endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsQuery {
    /// Lower date bound, `YYYY-MM-DD`
    #[serde(default)]
    pub from: Option<String>,
    /// Upper date bound, `YYYY-MM-DD`
    #[serde(default)]
    pub to: Option<String>,
    /// Maximum number of entries to return
    #[serde(default)]
    pub limit: Option<String>,
}

/// User identity on the wire
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Username
    pub username: String,
    /// Opaque user id
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id.to_string(),
        }
    }
}

/// Recorded exercise on the wire; `_id` and `username` are the user's
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    /// Opaque user id
    #[serde(rename = "_id")]
    pub id: String,
    /// Username
    pub username: String,
    /// Exercise description
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Rendered calendar date, e.g. `Mon Jan 01 2024`
    pub date: String,
}

/// Single log entry projection: user and entry ids are dropped
#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    /// Exercise description
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Rendered calendar date
    pub date: String,
}

impl From<ExerciseEntry> for LogEntryResponse {
    fn from(entry: ExerciseEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration_minutes,
            date: format_log_date(entry.date),
        }
    }
}

/// Log query envelope on the wire
#[derive(Debug, Serialize)]
pub struct LogsResponse {
    /// Opaque user id
    #[serde(rename = "_id")]
    pub id: String,
    /// Username
    pub username: String,
    /// Total number of entries for the user, before filter and limit
    pub count: usize,
    /// Filtered entries, ascending by date
    pub log: Vec<LogEntryResponse>,
}

/// User API routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user API routes
    ///
    /// Both `/api/users` and `/api/users/` are registered; clients send
    /// either form.
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users",
                get(Self::handle_list_users).post(Self::handle_create_user),
            )
            .route(
                "/api/users/",
                get(Self::handle_list_users).post(Self::handle_create_user),
            )
            .route(
                "/api/users/:user_id/exercises",
                axum::routing::post(Self::handle_record_exercise),
            )
            .route("/api/users/:user_id/logs", get(Self::handle_get_logs))
            .with_state(resources)
    }

    /// Handle `GET /api/users/`
    async fn handle_list_users(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let users = services::users::list_users(&resources.database).await?;
        let body: Vec<UserResponse> = users.into_iter().map(Into::into).collect();

        Ok((StatusCode::OK, Json(body)).into_response())
    }

    /// Handle `POST /api/users/`
    async fn handle_create_user(
        State(resources): State<Arc<ServerResources>>,
        Form(request): Form<CreateUserRequest>,
    ) -> Result<Response, AppError> {
        let username = request.username.unwrap_or_default();
        let user = services::users::create_or_get_user(&resources.database, &username).await?;

        Ok((StatusCode::OK, Json(UserResponse::from(user))).into_response())
    }

    /// Handle `POST /api/users/:user_id/exercises`
    async fn handle_record_exercise(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Form(request): Form<RecordExerciseRequest>,
    ) -> Result<Response, AppError> {
        let (user, entry) = services::exercises::record_exercise(
            &resources.database,
            &user_id,
            request.description.as_deref().unwrap_or_default(),
            request.duration.as_deref().unwrap_or_default(),
            request.date.as_deref(),
        )
        .await?;

        let body = ExerciseResponse {
            id: user.id.to_string(),
            username: user.username,
            description: entry.description,
            duration: entry.duration_minutes,
            date: format_log_date(entry.date),
        };

        Ok((StatusCode::OK, Json(body)).into_response())
    }

    /// Handle `GET /api/users/:user_id/logs`
    async fn handle_get_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<LogsQuery>,
    ) -> Result<Response, AppError> {
        let log = services::logs::query_logs(
            &resources.database,
            &user_id,
            query.from.as_deref(),
            query.to.as_deref(),
            query.limit.as_deref(),
        )
        .await?;

        let body = LogsResponse {
            id: log.user.id.to_string(),
            username: log.user.username,
            count: log.count,
            log: log.entries.into_iter().map(Into::into).collect(),
        };

        Ok((StatusCode::OK, Json(body)).into_response())
    }
}
