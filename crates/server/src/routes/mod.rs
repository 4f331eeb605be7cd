use axum::http::StatusCode;
use database::error::ServiceError;
use log::error;

pub mod assignment;
pub mod employee;
pub mod health;
pub mod meeting;
pub mod project;
pub mod root;

/// Maps service failures onto HTTP status codes
pub(crate) fn error_status(err: ServiceError) -> StatusCode {
    match err {
        ServiceError::EmployeeNotFound(_)
        | ServiceError::MeetingNotFound(_)
        | ServiceError::ProjectNotFound(_)
        | ServiceError::AssignmentNotFound(_)
        | ServiceError::NotAttending { .. } => StatusCode::NOT_FOUND,
        ServiceError::AlreadyAttending { .. } => StatusCode::CONFLICT,
        ServiceError::Db(err) => {
            error!("database error: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
