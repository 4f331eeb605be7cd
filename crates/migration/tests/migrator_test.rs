use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use tempfile::TempDir;

async fn fresh_db(dir: &TempDir) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    Database::connect(&url)
        .await
        .expect("should open sqlite database")
}

async fn table_names(db: &DatabaseConnection) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        ))
        .await
        .expect("should query sqlite_master");

    rows.iter()
        .map(|row| row.try_get_by::<String, _>(0).expect("table name"))
        .collect()
}

#[tokio::test]
async fn up_creates_every_table() {
    let dir = TempDir::new().expect("should create temp dir");
    let db = fresh_db(&dir).await;

    Migrator::up(&db, None).await.expect("migrations should run");

    assert_eq!(
        table_names(&db).await,
        vec![
            "assignments",
            "employee_meetings",
            "employees",
            "meetings",
            "projects",
            "seaql_migrations",
        ]
    );
}

#[tokio::test]
async fn up_is_idempotent() {
    let dir = TempDir::new().expect("should create temp dir");
    let db = fresh_db(&dir).await;

    Migrator::up(&db, None)
        .await
        .expect("first run should succeed");
    Migrator::up(&db, None)
        .await
        .expect("second run should succeed");

    let pending = Migrator::get_pending_migrations(&db)
        .await
        .expect("status should be readable");
    assert!(pending.is_empty());
}

#[tokio::test]
async fn down_reverts_every_table() {
    let dir = TempDir::new().expect("should create temp dir");
    let db = fresh_db(&dir).await;

    Migrator::up(&db, None).await.expect("migrations should run");
    Migrator::down(&db, None)
        .await
        .expect("rollback should succeed");

    // Only the migration bookkeeping table survives a full rollback
    assert_eq!(table_names(&db).await, vec!["seaql_migrations"]);
}
