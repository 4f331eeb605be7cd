use axum::{
    Router,
    routing::{get, patch, put},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod doc;
pub mod dtos;
pub mod routes;
pub mod state;
pub mod utils;

use state::AppState;

/// Builds the application router with every route and layer attached
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/employees",
            get(routes::employee::get_employees).post(routes::employee::create_employee),
        )
        .route(
            "/employees/{id}",
            get(routes::employee::get_employee_by_id).delete(routes::employee::delete_employee),
        )
        .route(
            "/meetings",
            get(routes::meeting::get_meetings).post(routes::meeting::create_meeting),
        )
        .route(
            "/meetings/{id}",
            get(routes::meeting::get_meeting_by_id).delete(routes::meeting::delete_meeting),
        )
        .route(
            "/meetings/{id}/attendees/{employee_id}",
            put(routes::meeting::add_attendee).delete(routes::meeting::remove_attendee),
        )
        .route(
            "/projects",
            get(routes::project::get_projects).post(routes::project::create_project),
        )
        .route(
            "/projects/{id}",
            get(routes::project::get_project_by_id).delete(routes::project::delete_project),
        )
        .route(
            "/assignments",
            get(routes::assignment::get_assignments).post(routes::assignment::create_assignment),
        )
        .route(
            "/assignments/{id}",
            patch(routes::assignment::update_assignment)
                .delete(routes::assignment::delete_assignment),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", doc::ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
