use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::students::model::{Student, StudentDto};
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &SqlitePool, dto: StudentDto) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO students (first_name, last_name, phone, birthdate, email)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.phone)
        .bind(dto.birthdate)
        .bind(&dto.email)
        .execute(db)
        .await
        .map_err(Self::map_unique_violation)?;

        tracing::info!(email = %dto.email, "Student registered");
        Ok(())
    }

    /// All students, in insertion order by primary key.
    #[instrument(skip(db))]
    pub async fn get_students(db: &SqlitePool) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, phone, birthdate, email
             FROM students
             ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &SqlitePool, id: i64) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, phone, birthdate, email
             FROM students
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn student_exists(db: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let row: Option<i64> = sqlx::query_scalar("SELECT 1 FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to check student existence")
            .map_err(AppError::database)?;

        Ok(row.is_some())
    }

    /// Replace a student's record wholesale.
    ///
    /// The cross-student phone clash is reported before the existence of
    /// the target id is considered; the schema constraint still backs the
    /// check against races.
    #[instrument(skip(db, dto))]
    pub async fn update_student(db: &SqlitePool, id: i64, dto: StudentDto) -> Result<(), AppError> {
        let phone_taken: Option<i64> =
            sqlx::query_scalar("SELECT id FROM students WHERE phone = ? AND id != ?")
                .bind(&dto.phone)
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to check phone uniqueness")
                .map_err(AppError::database)?;

        if phone_taken.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Phone number already exists"
            )));
        }

        let result = sqlx::query(
            "UPDATE students
             SET first_name = ?, last_name = ?, phone = ?, birthdate = ?, email = ?
             WHERE id = ?",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.phone)
        .bind(dto.birthdate)
        .bind(&dto.email)
        .bind(id)
        .execute(db)
        .await
        .map_err(Self::map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        tracing::info!(student_id = id, "Student updated");
        Ok(())
    }

    /// Delete a student; enrollment rows go with it via cascade.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }

    /// Map a violated phone/email unique constraint to the same conflict
    /// a pre-insert check would have reported.
    fn map_unique_violation(e: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                let message = db_err.message();
                if message.contains("students.phone") {
                    return AppError::bad_request(anyhow::anyhow!("Phone number already exists"));
                }
                if message.contains("students.email") {
                    return AppError::bad_request(anyhow::anyhow!("Email already exists"));
                }
            }
        }
        AppError::database(anyhow::Error::from(e))
    }
}
