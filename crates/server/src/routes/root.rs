use axum::http::StatusCode;

/// Identifies the service, mostly useful as a smoke check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version", content_type = "text/plain", body = String)
    ),
    tag = ""
)]
pub async fn root() -> (StatusCode, String) {
    (
        StatusCode::OK,
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    )
}
