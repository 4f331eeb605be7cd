use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use crate::entities::{assignments, employee_meetings, employees, meetings, projects};
use crate::error::ServiceError;

pub mod assignment;
pub mod employee;
pub mod meeting;
pub mod project;

pub use assignment::AssignmentService;
pub use employee::EmployeeService;
pub use meeting::MeetingService;
pub use project::ProjectService;

/// Deletes every row in every table, association tables first so no foreign
/// key is left dangling mid-transaction. Returns the number of rows removed.
pub async fn wipe_all(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let txn = db.begin().await?;

    let mut removed = 0;
    removed += employee_meetings::Entity::delete_many()
        .exec(&txn)
        .await?
        .rows_affected;
    removed += assignments::Entity::delete_many()
        .exec(&txn)
        .await?
        .rows_affected;
    removed += employees::Entity::delete_many()
        .exec(&txn)
        .await?
        .rows_affected;
    removed += meetings::Entity::delete_many()
        .exec(&txn)
        .await?
        .rows_affected;
    removed += projects::Entity::delete_many()
        .exec(&txn)
        .await?
        .rows_affected;

    txn.commit().await?;
    Ok(removed)
}
