// ABOUTME: HTTP middleware for the exercise tracker service
// ABOUTME: Currently CORS configuration only

//! HTTP middleware

/// CORS middleware configuration
pub mod cors;
