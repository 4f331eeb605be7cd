use database::db::create_connection;
use log::info;
use server::{app, state::AppState, utils::shutdown::shutdown_signal};

/// Port used when the PORT environment variable is unset
const DEFAULT_PORT: u16 = 5555;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection()
        .await
        .expect("Failed to connect to database");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let app = app(AppState { db });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
