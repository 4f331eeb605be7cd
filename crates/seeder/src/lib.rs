use chrono::{NaiveDate, NaiveDateTime};
use database::entities::{assignments, employee_meetings, employees, meetings, projects};
use database::error::ServiceError;
use database::services::{
    self, AssignmentService, EmployeeService, MeetingService, ProjectService,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// Row counts observed after a seed run
#[derive(Debug, PartialEq, Eq)]
pub struct SeedSummary {
    pub employees: u64,
    pub meetings: u64,
    pub projects: u64,
    pub attendance_links: u64,
    pub assignments: u64,
}

/// Wipes every table and repopulates the sample data set. Safe to run as
/// often as needed; each run starts from empty tables.
pub async fn seed(db: &DatabaseConnection) -> Result<SeedSummary, ServiceError> {
    services::wipe_all(db).await?;

    // Employees
    let mira = EmployeeService::create(db, "Mira Chen".into(), date(2021, 3, 15)).await?;
    let dev = EmployeeService::create(db, "Dev Patel".into(), date(2019, 8, 1)).await?;
    let sol = EmployeeService::create(db, "Sol Ueda".into(), date(2022, 11, 7)).await?;
    let ana = EmployeeService::create(db, "Ana Barros".into(), date(2017, 6, 12)).await?;

    // Meetings
    let weekly_sync = MeetingService::create(
        db,
        "Platform weekly sync".into(),
        datetime(2025, 9, 1, 9, 30),
        "Building A, Room 142".into(),
    )
    .await?;
    let roadmap_review = MeetingService::create(
        db,
        "Q4 roadmap review".into(),
        datetime(2025, 9, 4, 15, 0),
        "Building D, Room 430".into(),
    )
    .await?;

    // Projects
    let billing = ProjectService::create(db, "Billing API rewrite".into(), 120_000).await?;
    let dashboard = ProjectService::create(db, "Mobile dashboard".into(), 75_000).await?;

    // Attendance: Mira attends both meetings, the roadmap review pulls in
    // everyone else as well
    MeetingService::add_attendee(db, weekly_sync.id, mira.id).await?;
    MeetingService::add_attendee(db, roadmap_review.id, mira.id).await?;
    MeetingService::add_attendee(db, roadmap_review.id, dev.id).await?;
    MeetingService::add_attendee(db, roadmap_review.id, sol.id).await?;
    MeetingService::add_attendee(db, roadmap_review.id, ana.id).await?;

    // Assignments; the dashboard one is still open-ended
    AssignmentService::create(
        db,
        "Project manager".into(),
        datetime(2025, 6, 2, 9, 0),
        Some(datetime(2025, 12, 19, 17, 0)),
        mira.id,
        billing.id,
    )
    .await?;
    AssignmentService::create(
        db,
        "Backend engineer".into(),
        datetime(2025, 6, 16, 9, 0),
        Some(datetime(2025, 11, 28, 17, 0)),
        dev.id,
        billing.id,
    )
    .await?;
    AssignmentService::create(
        db,
        "Backend engineer".into(),
        datetime(2025, 12, 1, 9, 0),
        None,
        dev.id,
        dashboard.id,
    )
    .await?;

    // Confirm the tables hold what we just inserted
    Ok(SeedSummary {
        employees: employees::Entity::find().count(db).await?,
        meetings: meetings::Entity::find().count(db).await?,
        projects: projects::Entity::find().count(db).await?,
        attendance_links: employee_meetings::Entity::find().count(db).await?,
        assignments: assignments::Entity::find().count(db).await?,
    })
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}
