use axum::{extract::State, http::StatusCode};
use sea_orm::{ConnectionTrait, Statement};

use crate::state::AppState;

/// Returns "OK" once the database answers a trivial query
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", content_type = "text/plain", body = String),
        (status = 503, description = "Database is unreachable")
    ),
    tag = "Health"
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str), StatusCode> {
    state
        .db
        .execute(Statement::from_string(
            state.db.get_database_backend(),
            "SELECT 1",
        ))
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok((StatusCode::OK, "OK"))
}
