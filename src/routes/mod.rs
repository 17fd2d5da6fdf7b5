// ABOUTME: Route module organization for the exercise tracker HTTP endpoints
// ABOUTME: Route definitions and thin handlers that delegate to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP route modules
//!
//! Each module contains only route definitions and thin handler functions
//! that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// User registration, exercise recording, and log query routes
pub mod users;

pub use health::HealthRoutes;
pub use users::UserRoutes;
