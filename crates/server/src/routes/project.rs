use crate::dtos::common::{ListParams, PaginationMeta, clamp_paging};
use crate::dtos::project::{
    NewProject, PaginatedProjectsResponse, ProjectDetailResponse, ProjectResponse,
    StaffAssignmentResponse,
};
use crate::routes::error_status;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::ProjectService;
use sea_orm::prelude::Uuid;

/// Get paginated list of projects
#[utoipa::path(
    get,
    path = "/projects",
    params(ListParams),
    responses(
        (status = 200, description = "List of projects retrieved successfully", body = PaginatedProjectsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Projects"
)]
pub async fn get_projects(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedProjectsResponse>, StatusCode> {
    let (page, per_page) = clamp_paging(params.page, params.per_page);

    let (projects, total_items) =
        ProjectService::get_projects_paginated(&state.db, page, per_page)
            .await
            .map_err(error_status)?;

    Ok(Json(PaginatedProjectsResponse {
        projects: projects.into_iter().map(ProjectResponse::from).collect(),
        pagination: PaginationMeta::new(page, per_page, total_items),
    }))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<ProjectResponse>), StatusCode> {
    let project = ProjectService::create(&state.db, body.title, body.budget)
        .await
        .map_err(error_status)?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// Get a specific project with its staff roster
#[utoipa::path(
    get,
    path = "/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectDetailResponse),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Projects"
)]
pub async fn get_project_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectDetailResponse>, StatusCode> {
    let project_data = ProjectService::get_project_by_id(&state.db, id)
        .await
        .map_err(error_status)?;

    match project_data {
        Some((project, staff)) => Ok(Json(ProjectDetailResponse {
            id: project.id.to_string(),
            title: project.title,
            budget: project.budget,
            staff: staff
                .into_iter()
                .map(|(assignment, employee)| StaffAssignmentResponse {
                    assignment_id: assignment.id.to_string(),
                    role: assignment.role,
                    start_date: assignment.start_date,
                    end_date: assignment.end_date,
                    employee_id: employee.id.to_string(),
                    employee_name: employee.name,
                })
                .collect(),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete a project; its assignments go with it
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    ProjectService::delete(&state.db, id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}
