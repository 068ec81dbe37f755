use std::collections::HashSet;

use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::students::service::StudentService;
use crate::modules::subjects::model::Subject;
use crate::modules::subjects::service::SubjectService;
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Subjects the student is enrolled in, alphabetical by name.
    #[instrument(skip(db))]
    pub async fn list_subjects(db: &SqlitePool, student_id: i64) -> Result<Vec<Subject>, AppError> {
        Self::ensure_student_exists(db, student_id).await?;
        SubjectService::enrolled_for_student(db, student_id).await
    }

    /// Enroll the student in every supplied subject id.
    ///
    /// All supplied ids must exist in the catalogue; pairs that already
    /// exist are skipped. Returns the number of associations actually
    /// created.
    #[instrument(skip(db))]
    pub async fn add_subjects(
        db: &SqlitePool,
        student_id: i64,
        subject_ids: &[i64],
    ) -> Result<u64, AppError> {
        if subject_ids.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "No subject ids provided"
            )));
        }

        Self::ensure_student_exists(db, student_id).await?;

        let missing = Self::missing_subject_ids(db, subject_ids).await?;
        if !missing.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Invalid subject ids: {:?}",
                missing
            )));
        }

        let mut added = 0;
        for subject_id in subject_ids {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO student_subject (student_id, subject_id) VALUES (?, ?)",
            )
            .bind(student_id)
            .bind(subject_id)
            .execute(db)
            .await
            .context("Failed to insert enrollment")
            .map_err(AppError::database)?;

            added += result.rows_affected();
        }

        tracing::info!(student_id, added, "Subjects added");
        Ok(added)
    }

    /// Drop the supplied subject ids from the student's enrollments.
    ///
    /// Ids that were never enrolled are skipped without complaint; the
    /// ids are not checked against the catalogue. Returns the number of
    /// associations actually deleted.
    #[instrument(skip(db))]
    pub async fn remove_subjects(
        db: &SqlitePool,
        student_id: i64,
        subject_ids: &[i64],
    ) -> Result<u64, AppError> {
        if subject_ids.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "No subject ids provided"
            )));
        }

        Self::ensure_student_exists(db, student_id).await?;

        let mut removed = 0;
        for subject_id in subject_ids {
            let result =
                sqlx::query("DELETE FROM student_subject WHERE student_id = ? AND subject_id = ?")
                    .bind(student_id)
                    .bind(subject_id)
                    .execute(db)
                    .await
                    .context("Failed to delete enrollment")
                    .map_err(AppError::database)?;

            removed += result.rows_affected();
        }

        tracing::info!(student_id, removed, "Subjects removed");
        Ok(removed)
    }

    async fn ensure_student_exists(db: &SqlitePool, student_id: i64) -> Result<(), AppError> {
        if !StudentService::student_exists(db, student_id).await? {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }
        Ok(())
    }

    /// Supplied ids with no catalogue row, sorted ascending.
    async fn missing_subject_ids(
        db: &SqlitePool,
        subject_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        let existing: HashSet<i64> = sqlx::query_scalar("SELECT id FROM subjects")
            .fetch_all(db)
            .await
            .context("Failed to fetch subject ids")
            .map_err(AppError::database)?
            .into_iter()
            .collect();

        let mut missing: Vec<i64> = subject_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();

        Ok(missing)
    }
}
