//! # Rollcall API
//!
//! A REST API built with Rust, Axum, and SQLite for managing student
//! registration records and their enrollment in subjects.
//!
//! ## Overview
//!
//! Rollcall provides a small backend for a student registration system:
//!
//! - **Student CRUD**: register, list, inspect, replace, and delete student
//!   records with phone/email uniqueness enforced by the schema
//! - **Enrollment**: bulk add/remove of student↔subject associations with
//!   idempotent semantics and change counts
//! - **Authentication**: a single shared bearer token handed out by an
//!   admin login endpoint and required on all student routes
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (app, auth, database)
//! ├── middleware/       # Shared-token auth gate
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Admin login
//! │   ├── students/    # Student registration CRUD
//! │   ├── subjects/    # Subject catalogue (seeded, no write API)
//! │   └── enrollments/ # Student↔subject associations
//! └── utils/           # Shared utilities
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! DATABASE_URL=sqlite:students.db
//! ADMIN_USERNAME=admin
//! ADMIN_PASSWORD=admin123
//! SECURITY_TOKEN=your-shared-secret
//! LOGGING=true
//! LOG_FILE=student_actions.log
//! APP_HEADING="Student Registration System"
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Security Considerations
//!
//! - The token scheme is a static single-tenant shared secret; it is not a
//!   session or OAuth model and tokens never expire
//! - All student routes reject requests without a matching bearer token
//!   before any data is read or written

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
