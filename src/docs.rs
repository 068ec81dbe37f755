use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::enrollments::model::{AddedResponse, RemovedResponse, SubjectIdsDto};
use crate::modules::students::model::{AckResponse, Student, StudentDetailResponse, StudentDto};
use crate::modules::subjects::model::Subject;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::enrollments::controller::get_student_subjects,
        crate::modules::enrollments::controller::add_subjects,
        crate::modules::enrollments::controller::remove_subjects,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            Student,
            StudentDto,
            StudentDetailResponse,
            AckResponse,
            Subject,
            SubjectIdsDto,
            AddedResponse,
            RemovedResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin login"),
        (name = "Students", description = "Student registration endpoints"),
        (name = "Enrollments", description = "Student subject enrollment endpoints")
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "A student registration and subject enrollment REST API built with Rust, Axum, and SQLite."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build(),
                ),
            )
        }
    }
}
