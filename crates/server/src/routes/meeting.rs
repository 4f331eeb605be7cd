use crate::dtos::common::{ListParams, PaginationMeta, clamp_paging};
use crate::dtos::employee::EmployeeResponse;
use crate::dtos::meeting::{
    MeetingDetailResponse, MeetingResponse, NewMeeting, PaginatedMeetingsResponse,
};
use crate::routes::error_status;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::MeetingService;
use sea_orm::prelude::Uuid;

/// Get paginated list of meetings, earliest first
#[utoipa::path(
    get,
    path = "/meetings",
    params(ListParams),
    responses(
        (status = 200, description = "List of meetings retrieved successfully", body = PaginatedMeetingsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Meetings"
)]
pub async fn get_meetings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedMeetingsResponse>, StatusCode> {
    let (page, per_page) = clamp_paging(params.page, params.per_page);

    let (meetings, total_items) =
        MeetingService::get_meetings_paginated(&state.db, page, per_page)
            .await
            .map_err(error_status)?;

    Ok(Json(PaginatedMeetingsResponse {
        meetings: meetings.into_iter().map(MeetingResponse::from).collect(),
        pagination: PaginationMeta::new(page, per_page, total_items),
    }))
}

/// Create a new meeting
#[utoipa::path(
    post,
    path = "/meetings",
    request_body = NewMeeting,
    responses(
        (status = 201, description = "Meeting created", body = MeetingResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Meetings"
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(body): Json<NewMeeting>,
) -> Result<(StatusCode, Json<MeetingResponse>), StatusCode> {
    let meeting =
        MeetingService::create(&state.db, body.topic, body.scheduled_time, body.location)
            .await
            .map_err(error_status)?;

    Ok((StatusCode::CREATED, Json(MeetingResponse::from(meeting))))
}

/// Get a specific meeting with its attendee list
#[utoipa::path(
    get,
    path = "/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID")
    ),
    responses(
        (status = 200, description = "Meeting found", body = MeetingDetailResponse),
        (status = 404, description = "Meeting not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Meetings"
)]
pub async fn get_meeting_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MeetingDetailResponse>, StatusCode> {
    let meeting_data = MeetingService::get_meeting_by_id(&state.db, id)
        .await
        .map_err(error_status)?;

    match meeting_data {
        Some((meeting, attendees)) => Ok(Json(MeetingDetailResponse {
            id: meeting.id.to_string(),
            topic: meeting.topic,
            scheduled_time: meeting.scheduled_time,
            location: meeting.location,
            attendees: attendees.into_iter().map(EmployeeResponse::from).collect(),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete a meeting; its attendance rows go with it
#[utoipa::path(
    delete,
    path = "/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID")
    ),
    responses(
        (status = 204, description = "Meeting deleted"),
        (status = 404, description = "Meeting not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Meetings"
)]
pub async fn delete_meeting(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    MeetingService::delete(&state.db, id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add an employee to a meeting's attendee list
#[utoipa::path(
    put,
    path = "/meetings/{id}/attendees/{employee_id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID"),
        ("employee_id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee now attends the meeting"),
        (status = 404, description = "Meeting or employee not found"),
        (status = 409, description = "Employee already attends this meeting"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Meetings"
)]
pub async fn add_attendee(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, StatusCode> {
    MeetingService::add_attendee(&state.db, id, employee_id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove an employee from a meeting's attendee list
#[utoipa::path(
    delete,
    path = "/meetings/{id}/attendees/{employee_id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID"),
        ("employee_id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee no longer attends the meeting"),
        (status = 404, description = "No such attendance to remove"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Meetings"
)]
pub async fn remove_attendee(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, StatusCode> {
    MeetingService::remove_attendee(&state.db, id, employee_id)
        .await
        .map_err(error_status)?;

    Ok(StatusCode::NO_CONTENT)
}
