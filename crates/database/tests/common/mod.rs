use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

/// Opens a migrated SQLite database in a fresh temp directory. The TempDir
/// must be kept alive for as long as the connection is used.
pub async fn setup() -> (TempDir, DatabaseConnection) {
    let dir = TempDir::new().expect("should create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    let db = Database::connect(&url)
        .await
        .expect("should open sqlite database");
    Migrator::up(&db, None).await.expect("migrations should run");

    (dir, db)
}
