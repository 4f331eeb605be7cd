use crate::entities::{employee_meetings, employees, meetings};
use crate::error::ServiceError;
use chrono::NaiveDateTime;
use log::debug;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct MeetingService;

impl MeetingService {
    /// Inserts a new meeting and returns it
    pub async fn create(
        db: &DatabaseConnection,
        topic: String,
        scheduled_time: NaiveDateTime,
        location: String,
    ) -> Result<meetings::Model, ServiceError> {
        let meeting = meetings::Model {
            id: Uuid::new_v4(),
            topic,
            scheduled_time,
            location,
        };

        meetings::Entity::insert(meetings::ActiveModel {
            id: Set(meeting.id),
            topic: Set(meeting.topic.clone()),
            scheduled_time: Set(meeting.scheduled_time),
            location: Set(meeting.location.clone()),
        })
        .exec(db)
        .await?;

        debug!("created meeting {}", meeting.id);
        Ok(meeting)
    }

    /// Query meetings with pagination, earliest first
    pub async fn get_meetings_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<meetings::Model>, u64), ServiceError> {
        let query = meetings::Entity::find().order_by_asc(meetings::Column::ScheduledTime);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let meetings = paginator.fetch_page(page - 1).await?; // SeaORM uses 0-based pages

        Ok((meetings, total_items))
    }

    /// Get a single meeting with everyone attending it
    pub async fn get_meeting_by_id(
        db: &DatabaseConnection,
        meeting_id: Uuid,
    ) -> Result<Option<(meetings::Model, Vec<employees::Model>)>, ServiceError> {
        let meeting = match meetings::Entity::find_by_id(meeting_id).one(db).await? {
            Some(meeting) => meeting,
            None => return Ok(None),
        };

        let attendees = meeting
            .find_related(employees::Entity)
            .order_by_asc(employees::Column::Name)
            .all(db)
            .await?;

        Ok(Some((meeting, attendees)))
    }

    /// Links an employee to a meeting through the association table. Both
    /// sides must already exist, and the pair must not be linked yet.
    pub async fn add_attendee(
        db: &DatabaseConnection,
        meeting_id: Uuid,
        employee_id: Uuid,
    ) -> Result<(), ServiceError> {
        if meetings::Entity::find_by_id(meeting_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::MeetingNotFound(meeting_id));
        }

        if employees::Entity::find_by_id(employee_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::EmployeeNotFound(employee_id));
        }

        let existing = employee_meetings::Entity::find_by_id((employee_id, meeting_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::AlreadyAttending {
                employee_id,
                meeting_id,
            });
        }

        employee_meetings::Entity::insert(employee_meetings::ActiveModel {
            employee_id: Set(employee_id),
            meeting_id: Set(meeting_id),
        })
        .exec(db)
        .await?;

        debug!("employee {employee_id} now attends meeting {meeting_id}");
        Ok(())
    }

    /// Unlinks an employee from a meeting. Neither row is touched, only the
    /// association between them.
    pub async fn remove_attendee(
        db: &DatabaseConnection,
        meeting_id: Uuid,
        employee_id: Uuid,
    ) -> Result<(), ServiceError> {
        let result = employee_meetings::Entity::delete_many()
            .filter(employee_meetings::Column::EmployeeId.eq(employee_id))
            .filter(employee_meetings::Column::MeetingId.eq(meeting_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotAttending {
                employee_id,
                meeting_id,
            });
        }

        Ok(())
    }

    /// Deletes a meeting. Its attendance rows go with it through
    /// ON DELETE CASCADE; attendees themselves are kept.
    pub async fn delete(db: &DatabaseConnection, meeting_id: Uuid) -> Result<(), ServiceError> {
        let result = meetings::Entity::delete_by_id(meeting_id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::MeetingNotFound(meeting_id));
        }

        debug!("deleted meeting {meeting_id}");
        Ok(())
    }
}
