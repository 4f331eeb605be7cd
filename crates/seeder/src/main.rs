use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};

/// Migrates the database, then replaces whatever is in it with sample data
#[tokio::main]
async fn main() {
    env_logger::init();

    let db = create_connection()
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");

    let summary = seeder::seed(&db).await.expect("Failed to seed database");

    info!(
        "seeded {} employees, {} meetings, {} projects, {} attendance links, {} assignments",
        summary.employees,
        summary.meetings,
        summary.projects,
        summary.attendance_links,
        summary.assignments
    );
}
