use chrono::{NaiveDate, NaiveDateTime};
use database::entities::assignments;
use database::error::ServiceError;
use database::services::{AssignmentService, EmployeeService, ProjectService};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

mod common;

fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(9, 0, 0)
        .expect("valid time")
}

async fn sample_employee(db: &DatabaseConnection, name: &str) -> database::entities::employees::Model {
    let hire_date = NaiveDate::from_ymd_opt(2019, 8, 1).expect("valid date");

    EmployeeService::create(db, name.to_string(), hire_date)
        .await
        .expect("employee should be created")
}

async fn sample_project(db: &DatabaseConnection, title: &str) -> database::entities::projects::Model {
    ProjectService::create(db, title.to_string(), 120_000)
        .await
        .expect("project should be created")
}

async fn assignment_rows(db: &DatabaseConnection) -> u64 {
    assignments::Entity::find()
        .count(db)
        .await
        .expect("assignments should be countable")
}

#[tokio::test]
async fn assigning_requires_both_rows_to_exist() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let project = sample_project(&db, "Billing API rewrite").await;

    let err = AssignmentService::create(
        &db,
        "Project manager".to_string(),
        datetime(2025, 6, 2),
        None,
        Uuid::new_v4(),
        project.id,
    )
    .await
    .expect_err("unknown employee should fail");
    assert!(matches!(err, ServiceError::EmployeeNotFound(_)));

    let err = AssignmentService::create(
        &db,
        "Project manager".to_string(),
        datetime(2025, 6, 2),
        None,
        employee.id,
        Uuid::new_v4(),
    )
    .await
    .expect_err("unknown project should fail");
    assert!(matches!(err, ServiceError::ProjectNotFound(_)));

    assert_eq!(assignment_rows(&db).await, 0);
}

#[tokio::test]
async fn assignment_is_visible_from_both_sides() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let project = sample_project(&db, "Billing API rewrite").await;

    let assignment = AssignmentService::create(
        &db,
        "Project manager".to_string(),
        datetime(2025, 6, 2),
        Some(datetime(2025, 12, 19)),
        employee.id,
        project.id,
    )
    .await
    .expect("assignment should be created");

    // Employee side: the project shows up with the role attached
    let (_, _, employee_assignments) = EmployeeService::get_employee_by_id(&db, employee.id)
        .await
        .expect("employee should load")
        .expect("employee should exist");
    assert_eq!(employee_assignments.len(), 1);
    assert_eq!(employee_assignments[0].0.id, assignment.id);
    assert_eq!(employee_assignments[0].0.role, "Project manager");
    assert_eq!(employee_assignments[0].1.id, project.id);

    // Project side: the employee shows up on the roster
    let (_, staff) = ProjectService::get_project_by_id(&db, project.id)
        .await
        .expect("project should load")
        .expect("project should exist");
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].1.id, employee.id);
}

#[tokio::test]
async fn an_employee_can_hold_several_assignments() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Dev Patel").await;
    let billing = sample_project(&db, "Billing API rewrite").await;
    let dashboard = sample_project(&db, "Mobile dashboard").await;

    AssignmentService::create(
        &db,
        "Backend engineer".to_string(),
        datetime(2025, 6, 16),
        Some(datetime(2025, 11, 28)),
        employee.id,
        billing.id,
    )
    .await
    .expect("assignment should be created");
    AssignmentService::create(
        &db,
        "Backend engineer".to_string(),
        datetime(2025, 12, 1),
        None,
        employee.id,
        dashboard.id,
    )
    .await
    .expect("assignment should be created");

    let all = AssignmentService::get_assignments(&db, Some(employee.id), None)
        .await
        .expect("list should succeed");
    assert_eq!(all.len(), 2);

    // Narrowing by project keeps only the matching engagement
    let billing_only = AssignmentService::get_assignments(&db, Some(employee.id), Some(billing.id))
        .await
        .expect("list should succeed");
    assert_eq!(billing_only.len(), 1);
    assert_eq!(billing_only[0].2.id, billing.id);
}

#[tokio::test]
async fn deleting_an_employee_deletes_their_assignments() {
    let (_dir, db) = common::setup().await;
    let mira = sample_employee(&db, "Mira Chen").await;
    let dev = sample_employee(&db, "Dev Patel").await;
    let project = sample_project(&db, "Billing API rewrite").await;

    AssignmentService::create(
        &db,
        "Project manager".to_string(),
        datetime(2025, 6, 2),
        None,
        mira.id,
        project.id,
    )
    .await
    .expect("assignment should be created");
    AssignmentService::create(
        &db,
        "Backend engineer".to_string(),
        datetime(2025, 6, 16),
        None,
        dev.id,
        project.id,
    )
    .await
    .expect("assignment should be created");

    EmployeeService::delete(&db, mira.id)
        .await
        .expect("delete should succeed");

    // Mira's assignment cascaded away; Dev's survives
    assert_eq!(assignment_rows(&db).await, 1);
    let (_, staff) = ProjectService::get_project_by_id(&db, project.id)
        .await
        .expect("project should load")
        .expect("project should exist");
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].1.id, dev.id);
}

#[tokio::test]
async fn deleting_a_project_deletes_its_assignments() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Mira Chen").await;
    let billing = sample_project(&db, "Billing API rewrite").await;
    let dashboard = sample_project(&db, "Mobile dashboard").await;

    AssignmentService::create(
        &db,
        "Project manager".to_string(),
        datetime(2025, 6, 2),
        None,
        employee.id,
        billing.id,
    )
    .await
    .expect("assignment should be created");
    AssignmentService::create(
        &db,
        "Backend engineer".to_string(),
        datetime(2025, 12, 1),
        None,
        employee.id,
        dashboard.id,
    )
    .await
    .expect("assignment should be created");

    ProjectService::delete(&db, billing.id)
        .await
        .expect("delete should succeed");

    assert_eq!(assignment_rows(&db).await, 1);

    // The employee is untouched and keeps their other engagement
    let (_, _, remaining) = EmployeeService::get_employee_by_id(&db, employee.id)
        .await
        .expect("employee should load")
        .expect("employee should exist");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].1.id, dashboard.id);
}

#[tokio::test]
async fn updating_an_assignment_changes_only_given_fields() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Sol Ueda").await;
    let project = sample_project(&db, "Mobile dashboard").await;

    let assignment = AssignmentService::create(
        &db,
        "Backend engineer".to_string(),
        datetime(2025, 12, 1),
        None,
        employee.id,
        project.id,
    )
    .await
    .expect("assignment should be created");

    let updated = AssignmentService::update(
        &db,
        assignment.id,
        Some("Tech lead".to_string()),
        None,
        Some(datetime(2026, 6, 30)),
    )
    .await
    .expect("update should succeed");

    assert_eq!(updated.role, "Tech lead");
    assert_eq!(updated.start_date, assignment.start_date);
    assert_eq!(updated.end_date, Some(datetime(2026, 6, 30)));

    // An empty update is a no-op
    let unchanged = AssignmentService::update(&db, assignment.id, None, None, None)
        .await
        .expect("empty update should succeed");
    assert_eq!(unchanged.role, "Tech lead");
}

#[tokio::test]
async fn updating_a_missing_assignment_fails() {
    let (_dir, db) = common::setup().await;

    let err = AssignmentService::update(&db, Uuid::new_v4(), Some("Tech lead".to_string()), None, None)
        .await
        .expect_err("unknown assignment should fail");
    assert!(matches!(err, ServiceError::AssignmentNotFound(_)));
}

#[tokio::test]
async fn deleting_an_assignment_keeps_both_endpoints() {
    let (_dir, db) = common::setup().await;
    let employee = sample_employee(&db, "Ana Barros").await;
    let project = sample_project(&db, "Billing API rewrite").await;

    let assignment = AssignmentService::create(
        &db,
        "Backend engineer".to_string(),
        datetime(2025, 6, 16),
        None,
        employee.id,
        project.id,
    )
    .await
    .expect("assignment should be created");

    AssignmentService::delete(&db, assignment.id)
        .await
        .expect("delete should succeed");

    assert_eq!(assignment_rows(&db).await, 0);
    assert!(
        EmployeeService::get_employee_by_id(&db, employee.id)
            .await
            .expect("employee should load")
            .is_some()
    );
    assert!(
        ProjectService::get_project_by_id(&db, project.id)
            .await
            .expect("project should load")
            .is_some()
    );
}
