use chrono::NaiveDateTime;
use database::entities::assignments;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::dtos::employee::EmployeeResponse;
use crate::dtos::project::ProjectResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: String,
    pub role: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub employee_id: String,
    pub project_id: String,
}

impl From<assignments::Model> for AssignmentResponse {
    fn from(assignment: assignments::Model) -> Self {
        Self {
            id: assignment.id.to_string(),
            role: assignment.role,
            start_date: assignment.start_date,
            end_date: assignment.end_date,
            employee_id: assignment.employee_id.to_string(),
            project_id: assignment.project_id.to_string(),
        }
    }
}

/// An assignment with both of its endpoints resolved
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentDetailResponse {
    pub id: String,
    pub role: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub employee: EmployeeResponse,
    pub project: ProjectResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewAssignment {
    pub role: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub employee_id: Uuid,
    pub project_id: Uuid,
}

/// Partial update; fields left out keep their current value
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignmentUpdate {
    pub role: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AssignmentQueryParams {
    pub employee_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
}
