use crate::dtos::assignment::{
    AssignmentDetailResponse, AssignmentQueryParams, AssignmentResponse, AssignmentUpdate,
    NewAssignment,
};
use crate::dtos::employee::EmployeeResponse;
use crate::dtos::project::ProjectResponse;
use crate::routes::error_status;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::AssignmentService;
use sea_orm::prelude::Uuid;

/// Get assignments, optionally narrowed to one employee or one project
#[utoipa::path(
    get,
    path = "/assignments",
    params(AssignmentQueryParams),
    responses(
        (status = 200, description = "List of assignments retrieved successfully", body = Vec<AssignmentDetailResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    Query(params): Query<AssignmentQueryParams>,
) -> Result<Json<Vec<AssignmentDetailResponse>>, StatusCode> {
    let assignments =
        AssignmentService::get_assignments(&state.db, params.employee_id, params.project_id)
            .await
            .map_err(error_status)?;

    let responses = assignments
        .into_iter()
        .map(|(assignment, employee, project)| AssignmentDetailResponse {
            id: assignment.id.to_string(),
            role: assignment.role,
            start_date: assignment.start_date,
            end_date: assignment.end_date,
            employee: EmployeeResponse::from(employee),
            project: ProjectResponse::from(project),
        })
        .collect();

    Ok(Json(responses))
}

/// Assign an employee to a project
#[utoipa::path(
    post,
    path = "/assignments",
    request_body = NewAssignment,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentResponse),
        (status = 404, description = "Employee or project not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(body): Json<NewAssignment>,
) -> Result<(StatusCode, Json<AssignmentResponse>), StatusCode> {
    let assignment = AssignmentService::create(
        &state.db,
        body.role,
        body.start_date,
        body.end_date,
        body.employee_id,
        body.project_id,
    )
    .await
    .map_err(error_status)?;

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse::from(assignment)),
    ))
}

/// Update the role or period of an assignment
#[utoipa::path(
    patch,
    path = "/assignments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assignment ID")
    ),
    request_body = AssignmentUpdate,
    responses(
        (status = 200, description = "Assignment updated", body = AssignmentResponse),
        (status = 404, description = "Assignment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignmentUpdate>,
) -> Result<Json<AssignmentResponse>, StatusCode> {
    let assignment =
        AssignmentService::update(&state.db, id, body.role, body.start_date, body.end_date)
            .await
            .map_err(error_status)?;

    Ok(Json(AssignmentResponse::from(assignment)))
}

/// Delete an assignment; the employee and project stay
#[utoipa::path(
    delete,
    path = "/assignments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assignments"
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    AssignmentService::delete(&state.db, id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}
