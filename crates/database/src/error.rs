use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the database services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("employee {0} not found")]
    EmployeeNotFound(Uuid),

    #[error("meeting {0} not found")]
    MeetingNotFound(Uuid),

    #[error("project {0} not found")]
    ProjectNotFound(Uuid),

    #[error("assignment {0} not found")]
    AssignmentNotFound(Uuid),

    #[error("employee {employee_id} already attends meeting {meeting_id}")]
    AlreadyAttending { employee_id: Uuid, meeting_id: Uuid },

    #[error("employee {employee_id} does not attend meeting {meeting_id}")]
    NotAttending { employee_id: Uuid, meeting_id: Uuid },

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}
