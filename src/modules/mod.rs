pub mod auth;
pub mod enrollments;
pub mod students;
pub mod subjects;
