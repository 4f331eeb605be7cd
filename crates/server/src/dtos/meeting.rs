use chrono::NaiveDateTime;
use database::entities::meetings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dtos::common::PaginationMeta;
use crate::dtos::employee::EmployeeResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingResponse {
    pub id: String,
    pub topic: String,
    pub scheduled_time: NaiveDateTime,
    pub location: String,
}

impl From<meetings::Model> for MeetingResponse {
    fn from(meeting: meetings::Model) -> Self {
        Self {
            id: meeting.id.to_string(),
            topic: meeting.topic,
            scheduled_time: meeting.scheduled_time,
            location: meeting.location,
        }
    }
}

/// A meeting with its attendee list expanded
#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingDetailResponse {
    pub id: String,
    pub topic: String,
    pub scheduled_time: NaiveDateTime,
    pub location: String,
    pub attendees: Vec<EmployeeResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedMeetingsResponse {
    pub meetings: Vec<MeetingResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewMeeting {
    pub topic: String,
    pub scheduled_time: NaiveDateTime,
    pub location: String,
}
