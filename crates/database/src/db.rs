use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connection string used when DATABASE_URL is unset
const DEFAULT_DATABASE_URL: &str = "sqlite://workforce.db?mode=rwc";

/// Creates a database connection from the DATABASE_URL environment variable
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    Database::connect(url).await
}
