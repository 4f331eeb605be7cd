pub use sea_orm_migration::prelude::*;

mod m20250812_create_core_tables;
mod m20250813_create_employee_meetings;
mod m20250814_create_assignments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250812_create_core_tables::Migration),
            Box::new(m20250813_create_employee_meetings::Migration),
            Box::new(m20250814_create_assignments::Migration),
        ]
    }
}
