//! Database configuration and connection pool initialization.
//!
//! The database is a single SQLite file whose location is read from the
//! `DATABASE_URL` environment variable (default `sqlite:students.db`).
//! Handlers check connections out of the pool for the duration of their
//! queries only; nothing is held across requests. SQLite's own
//! single-writer locking is relied upon as-is — no retry or backoff is
//! added on lock conflicts.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if the URL is malformed, the file cannot be
//! opened or created, or a migration fails. This runs once at startup.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::str::FromStr;

/// Opens the SQLite pool and brings the schema up to date.
///
/// Foreign-key enforcement is switched on for every pooled connection so
/// that deleting a student or a subject cascades to its enrollment rows.
pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:students.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
