use crate::routes::{assignment, employee, health, meeting, project, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        employee::get_employees,
        employee::create_employee,
        employee::get_employee_by_id,
        employee::delete_employee,
        meeting::get_meetings,
        meeting::create_meeting,
        meeting::get_meeting_by_id,
        meeting::delete_meeting,
        meeting::add_attendee,
        meeting::remove_attendee,
        project::get_projects,
        project::create_project,
        project::get_project_by_id,
        project::delete_project,
        assignment::get_assignments,
        assignment::create_assignment,
        assignment::update_assignment,
        assignment::delete_assignment
    ),
    tags(
        (name = "Employees", description = "Employee related endpoints"),
        (name = "Meetings", description = "Meeting endpoints, including attendance management"),
        (name = "Projects", description = "Project related endpoints"),
        (name = "Assignments", description = "Employee-to-project assignment endpoints"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Workforce API",
        version = "1.0.0",
        description = "Employees, meetings, projects, and the relationships between them",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
