//! Student domain models and DTOs.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::subjects::model::Subject;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s-]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[5-9]\d{9}$").unwrap());

/// A registered student.
#[derive(Serialize, FromRow, Debug, ToSchema)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub birthdate: NaiveDate,
    pub email: String,
}

/// Request body for registering a student or replacing an existing record.
///
/// Updates replace the whole record; there is no partial patch.
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct StudentDto {
    #[validate(
        length(min = 2, max = 50, message = "first_name must be 2-50 characters"),
        regex(
            path = *NAME_RE,
            message = "first_name may only contain letters, spaces and hyphens"
        )
    )]
    pub first_name: String,
    #[validate(
        length(min = 2, max = 50, message = "last_name must be 2-50 characters"),
        regex(
            path = *NAME_RE,
            message = "last_name may only contain letters, spaces and hyphens"
        )
    )]
    pub last_name: String,
    #[validate(regex(
        path = *PHONE_RE,
        message = "phone must be 10 digits with the first digit 5-9"
    ))]
    pub phone: String,
    pub birthdate: NaiveDate,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

/// Student detail returned by `GET /api/students/{id}`: the record plus
/// the subjects the student is enrolled in and the rest of the catalogue.
#[derive(Serialize, Debug, ToSchema)]
pub struct StudentDetailResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub birthdate: NaiveDate,
    pub email: String,
    pub enrolled_subjects: Vec<Subject>,
    pub available_subjects: Vec<Subject>,
}

impl StudentDetailResponse {
    pub fn new(student: Student, enrolled: Vec<Subject>, available: Vec<Subject>) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            phone: student.phone,
            birthdate: student.birthdate,
            email: student.email,
            enrolled_subjects: enrolled,
            available_subjects: available,
        }
    }
}

/// Acknowledgment body for create/update/delete.
#[derive(Serialize, Debug, ToSchema)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

impl AckResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
