use chrono::NaiveDateTime;
use database::entities::projects;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dtos::common::PaginationMeta;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub budget: i32,
}

impl From<projects::Model> for ProjectResponse {
    fn from(project: projects::Model) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            budget: project.budget,
        }
    }
}

/// A project with its staffing expanded, one entry per assignment
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub id: String,
    pub title: String,
    pub budget: i32,
    pub staff: Vec<StaffAssignmentResponse>,
}

/// One assignment as seen from the project side
#[derive(Debug, Serialize, ToSchema)]
pub struct StaffAssignmentResponse {
    pub assignment_id: String,
    pub role: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub employee_id: String,
    pub employee_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProjectsResponse {
    pub projects: Vec<ProjectResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewProject {
    pub title: String,
    pub budget: i32,
}
