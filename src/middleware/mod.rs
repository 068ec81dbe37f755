//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client obtains the shared token from `POST /api/auth/login`
//! 2. Client sends requests with `Authorization: Bearer <token>`
//! 3. [`auth::require_token`] compares the token against the configured
//!    secret before any protected handler runs
//!
//! The landing route, the login endpoint, and the API doc routes are not
//! behind the gate.

pub mod auth;
