use chrono::{NaiveDate, NaiveDateTime};
use database::entities::employees;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dtos::common::{PaginationMeta, default_page, default_per_page};
use crate::dtos::meeting::MeetingResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub hire_date: NaiveDate,
}

impl From<employees::Model> for EmployeeResponse {
    fn from(employee: employees::Model) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name,
            hire_date: employee.hire_date,
        }
    }
}

/// An employee with both of their relationship sides expanded: the meetings
/// they attend and the projects they are assigned to
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeDetailResponse {
    pub id: String,
    pub name: String,
    pub hire_date: NaiveDate,
    pub meetings: Vec<MeetingResponse>,
    pub assignments: Vec<EmployeeAssignmentResponse>,
}

/// One project engagement as seen from the employee side
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeAssignmentResponse {
    pub assignment_id: String,
    pub role: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub project_id: String,
    pub project_title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedEmployeesResponse {
    pub employees: Vec<EmployeeResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewEmployee {
    pub name: String,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct EmployeeQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// Substring match on the employee name
    pub search: Option<String>,
}
