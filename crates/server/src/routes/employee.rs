use crate::dtos::common::{PaginationMeta, clamp_paging};
use crate::dtos::employee::{
    EmployeeAssignmentResponse, EmployeeDetailResponse, EmployeeQueryParams, EmployeeResponse,
    NewEmployee, PaginatedEmployeesResponse,
};
use crate::dtos::meeting::MeetingResponse;
use crate::routes::error_status;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{
    entities::{assignments, employees, meetings, projects},
    services::EmployeeService,
};
use sea_orm::prelude::Uuid;

/// Get paginated list of employees
#[utoipa::path(
    get,
    path = "/employees",
    params(EmployeeQueryParams),
    responses(
        (status = 200, description = "List of employees retrieved successfully", body = PaginatedEmployeesResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn get_employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeeQueryParams>,
) -> Result<Json<PaginatedEmployeesResponse>, StatusCode> {
    let (page, per_page) = clamp_paging(params.page, params.per_page);

    let (employees, total_items) =
        EmployeeService::get_employees_paginated(&state.db, page, per_page, params.search)
            .await
            .map_err(error_status)?;

    Ok(Json(PaginatedEmployeesResponse {
        employees: employees.into_iter().map(EmployeeResponse::from).collect(),
        pagination: PaginationMeta::new(page, per_page, total_items),
    }))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<NewEmployee>,
) -> Result<(StatusCode, Json<EmployeeResponse>), StatusCode> {
    let employee = EmployeeService::create(&state.db, body.name, body.hire_date)
        .await
        .map_err(error_status)?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// Get a specific employee with their meetings and project assignments
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDetailResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeDetailResponse>, StatusCode> {
    let employee_data = EmployeeService::get_employee_by_id(&state.db, id)
        .await
        .map_err(error_status)?;

    match employee_data {
        Some((employee, meetings, assignments)) => {
            let response = convert_to_detail_response(employee, meetings, assignments);
            Ok(Json(response))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete an employee; their assignments and attendance rows go with them
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    EmployeeService::delete(&state.db, id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Helper to convert database models into the nested employee response
fn convert_to_detail_response(
    employee: employees::Model,
    meetings: Vec<meetings::Model>,
    assignments: Vec<(assignments::Model, projects::Model)>,
) -> EmployeeDetailResponse {
    EmployeeDetailResponse {
        id: employee.id.to_string(),
        name: employee.name,
        hire_date: employee.hire_date,
        meetings: meetings.into_iter().map(MeetingResponse::from).collect(),
        assignments: assignments
            .into_iter()
            .map(|(assignment, project)| EmployeeAssignmentResponse {
                assignment_id: assignment.id.to_string(),
                role: assignment.role,
                start_date: assignment.start_date,
                end_date: assignment.end_date,
                project_id: project.id.to_string(),
                project_title: project.title,
            })
            .collect(),
    }
}
