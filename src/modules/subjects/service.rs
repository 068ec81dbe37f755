use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::subjects::model::Subject;
use crate::utils::errors::AppError;

/// Starter catalogue inserted the first time the database comes up.
pub const DEFAULT_SUBJECTS: [&str; 5] =
    ["Mathematics", "Physics", "Chemistry", "Biology", "History"];

pub struct SubjectService;

impl SubjectService {
    /// Seed the starter subjects if the table is empty.
    ///
    /// Name clashes with rows that already exist are ignored rather than
    /// treated as errors, so running this repeatedly is harmless.
    #[instrument(skip(db))]
    pub async fn seed_defaults(db: &SqlitePool) -> Result<(), AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(db)
            .await
            .context("Failed to count subjects")
            .map_err(AppError::database)?;

        if count > 0 {
            return Ok(());
        }

        for name in DEFAULT_SUBJECTS {
            sqlx::query("INSERT OR IGNORE INTO subjects (name) VALUES (?)")
                .bind(name)
                .execute(db)
                .await
                .context("Failed to seed subjects")
                .map_err(AppError::database)?;
        }

        tracing::info!("Seeded default subject catalogue");
        Ok(())
    }

    /// Subjects the student is enrolled in, ordered alphabetically by name.
    #[instrument(skip(db))]
    pub async fn enrolled_for_student(
        db: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(
            "SELECT s.id, s.name FROM subjects s
             JOIN student_subject ss ON ss.subject_id = s.id
             WHERE ss.student_id = ?
             ORDER BY s.name",
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch enrolled subjects")
        .map_err(AppError::database)
    }

    /// The complement set: subjects the student could still enroll in,
    /// ordered alphabetically by name.
    #[instrument(skip(db))]
    pub async fn available_for_student(
        db: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(
            "SELECT id, name FROM subjects
             WHERE id NOT IN (SELECT subject_id FROM student_subject WHERE student_id = ?)
             ORDER BY name",
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch available subjects")
        .map_err(AppError::database)
    }
}
