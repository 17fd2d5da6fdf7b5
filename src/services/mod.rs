// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Protocol-agnostic operations over the store adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain service layer
//!
//! Business logic extracted from route handlers. Services validate input,
//! talk to the store through the [`crate::database_plugins::DatabaseProvider`]
//! interface, and return domain types; the HTTP layer only projects their
//! results onto the wire.

/// Exercise recording: validation and append of log entries
pub mod exercises;

/// Log querying: date-range filtering, sorting, and truncation
pub mod logs;

/// User registry: list and idempotent get-or-create
pub mod users;
