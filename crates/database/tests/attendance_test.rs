use chrono::NaiveDate;
use database::entities::employee_meetings;
use database::error::ServiceError;
use database::services::{self, EmployeeService, MeetingService, ProjectService};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

mod common;

async fn sample_employee(db: &DatabaseConnection, name: &str) -> database::entities::employees::Model {
    let hire_date = NaiveDate::from_ymd_opt(2021, 3, 15).expect("valid date");

    EmployeeService::create(db, name.to_string(), hire_date)
        .await
        .expect("employee should be created")
}

async fn sample_meeting(db: &DatabaseConnection, topic: &str) -> database::entities::meetings::Model {
    let scheduled_time = NaiveDate::from_ymd_opt(2025, 9, 1)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time");

    MeetingService::create(
        db,
        topic.to_string(),
        scheduled_time,
        "Building A, Room 142".to_string(),
    )
    .await
    .expect("meeting should be created")
}

async fn attendance_rows(db: &DatabaseConnection) -> u64 {
    employee_meetings::Entity::find()
        .count(db)
        .await
        .expect("join table should be countable")
}

#[tokio::test]
async fn attaching_links_both_sides() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;

    MeetingService::add_attendee(&db, meeting.id, employee.id)
        .await
        .expect("attach should succeed");

    // Meeting side sees the employee
    let (_, attendees) = MeetingService::get_meeting_by_id(&db, meeting.id)
        .await
        .expect("meeting should load")
        .expect("meeting should exist");
    assert_eq!(attendees.len(), 1);
    assert_eq!(attendees[0].id, employee.id);

    // Employee side sees the meeting
    let (_, meetings, _) = EmployeeService::get_employee_by_id(&db, employee.id)
        .await
        .expect("employee should load")
        .expect("employee should exist");
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].id, meeting.id);

    assert_eq!(attendance_rows(&db).await, 1);
}

#[tokio::test]
async fn attaching_twice_is_a_conflict() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;

    MeetingService::add_attendee(&db, meeting.id, employee.id)
        .await
        .expect("first attach should succeed");

    let err = MeetingService::add_attendee(&db, meeting.id, employee.id)
        .await
        .expect_err("second attach should fail");
    assert!(matches!(err, ServiceError::AlreadyAttending { .. }));

    // Still exactly one association row
    assert_eq!(attendance_rows(&db).await, 1);
}

#[tokio::test]
async fn attaching_requires_both_rows_to_exist() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;

    let err = MeetingService::add_attendee(&db, Uuid::new_v4(), employee.id)
        .await
        .expect_err("unknown meeting should fail");
    assert!(matches!(err, ServiceError::MeetingNotFound(_)));

    let err = MeetingService::add_attendee(&db, meeting.id, Uuid::new_v4())
        .await
        .expect_err("unknown employee should fail");
    assert!(matches!(err, ServiceError::EmployeeNotFound(_)));

    assert_eq!(attendance_rows(&db).await, 0);
}

#[tokio::test]
async fn detaching_removes_only_the_association() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;

    MeetingService::add_attendee(&db, meeting.id, employee.id)
        .await
        .expect("attach should succeed");
    MeetingService::remove_attendee(&db, meeting.id, employee.id)
        .await
        .expect("detach should succeed");

    assert_eq!(attendance_rows(&db).await, 0);

    // Both rows themselves survive
    assert!(
        EmployeeService::get_employee_by_id(&db, employee.id)
            .await
            .expect("employee should load")
            .is_some()
    );
    assert!(
        MeetingService::get_meeting_by_id(&db, meeting.id)
            .await
            .expect("meeting should load")
            .is_some()
    );
}

#[tokio::test]
async fn detaching_a_pair_that_is_not_linked_fails() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;

    let err = MeetingService::remove_attendee(&db, meeting.id, employee.id)
        .await
        .expect_err("detach without attach should fail");
    assert!(matches!(err, ServiceError::NotAttending { .. }));
}

#[tokio::test]
async fn deleting_an_employee_clears_their_attendance() {
    let (_dir, db) = common::setup().await;
    let mira = sample_employee(&db, "Mira Chen").await;
    let dev = sample_employee(&db, "Dev Patel").await;
    let meeting = sample_meeting(&db, "Q4 roadmap review").await;

    MeetingService::add_attendee(&db, meeting.id, mira.id)
        .await
        .expect("attach should succeed");
    MeetingService::add_attendee(&db, meeting.id, dev.id)
        .await
        .expect("attach should succeed");

    EmployeeService::delete(&db, mira.id)
        .await
        .expect("delete should succeed");

    // Only Mira's association row is gone
    let (_, attendees) = MeetingService::get_meeting_by_id(&db, meeting.id)
        .await
        .expect("meeting should load")
        .expect("meeting should exist");
    assert_eq!(attendees.len(), 1);
    assert_eq!(attendees[0].id, dev.id);
    assert_eq!(attendance_rows(&db).await, 1);
}

#[tokio::test]
async fn deleting_a_meeting_clears_its_attendance() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;

    MeetingService::add_attendee(&db, meeting.id, employee.id)
        .await
        .expect("attach should succeed");

    MeetingService::delete(&db, meeting.id)
        .await
        .expect("delete should succeed");

    assert_eq!(attendance_rows(&db).await, 0);

    // The attendee is untouched
    assert!(
        EmployeeService::get_employee_by_id(&db, employee.id)
            .await
            .expect("employee should load")
            .is_some()
    );
}

#[tokio::test]
async fn wipe_all_leaves_no_rows_behind() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let meeting = sample_meeting(&db, "Platform weekly sync").await;
    ProjectService::create(&db, "Billing API rewrite".to_string(), 120_000)
        .await
        .expect("project should be created");

    MeetingService::add_attendee(&db, meeting.id, employee.id)
        .await
        .expect("attach should succeed");

    let removed = services::wipe_all(&db).await.expect("wipe should succeed");
    assert_eq!(removed, 4);

    assert_eq!(attendance_rows(&db).await, 0);
    let (employees, total) = EmployeeService::get_employees_paginated(&db, 1, 20, None)
        .await
        .expect("list should succeed");
    assert!(employees.is_empty());
    assert_eq!(total, 0);
}
