//! Configuration modules for the Rollcall API.
//!
//! Each submodule handles a specific aspect of configuration, loaded once
//! at process start from environment variables and carried in [`crate::state::AppState`]
//! rather than looked up ambiently from handlers.
//!
//! # Modules
//!
//! - [`app`]: Display heading and file-logging toggle
//! - [`auth`]: Admin credential pair and the shared security token
//! - [`database`]: SQLite connection pool initialization and migrations

pub mod app;
pub mod auth;
pub mod database;
