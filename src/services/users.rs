// ABOUTME: User registry business logic
// ABOUTME: Lists users and provides idempotent get-or-create by username
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::{debug, info};
use uuid::Uuid;

use crate::constants::error_messages;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::{AppError, AppResult};
use crate::models::User;

/// List all registered users
///
/// # Errors
///
/// Returns an error if the store query fails.
pub async fn list_users(database: &Database) -> AppResult<Vec<User>> {
    let users = database.get_users().await?;
    Ok(users)
}

/// Get-or-create a user by exact username match
///
/// Idempotent: a second call with the same username returns the existing
/// record unchanged, with no error for "already exists". There is no
/// atomicity between the lookup and the insert; the store's UNIQUE index
/// is the only backstop under concurrent creation.
///
/// # Errors
///
/// Returns a validation error if the username is empty, or a store error
/// if the lookup or insert fails.
pub async fn create_or_get_user(database: &Database, username: &str) -> AppResult<User> {
    if username.is_empty() {
        return Err(AppError::missing_field(error_messages::USERNAME_REQUIRED));
    }

    if let Some(existing) = database.get_user_by_username(username).await? {
        debug!(user_id = %existing.id, "username already registered, returning existing user");
        return Ok(existing);
    }

    let user = User::new(username.to_owned());
    database.create_user(&user).await?;
    info!(user_id = %user.id, "registered new user");

    Ok(user)
}

/// Resolve a raw user id string to a known user
///
/// A malformed id is indistinguishable from an unknown one at the API
/// surface: both are "User not found!".
///
/// # Errors
///
/// Returns a not-found error if the id does not resolve, or a store error
/// if the lookup fails.
pub async fn get_user_required(database: &Database, raw_user_id: &str) -> AppResult<User> {
    let Ok(user_id) = Uuid::parse_str(raw_user_id) else {
        return Err(AppError::not_found(error_messages::USER_NOT_FOUND));
    };

    database
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(error_messages::USER_NOT_FOUND))
}
