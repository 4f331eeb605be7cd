use crate::entities::{assignments, employees, meetings, projects};
use crate::error::ServiceError;
use chrono::NaiveDate;
use log::debug;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// An employee together with the meetings they attend and their project
/// assignments
pub type EmployeeDetail = (
    employees::Model,
    Vec<meetings::Model>,
    Vec<(assignments::Model, projects::Model)>,
);

pub struct EmployeeService;

impl EmployeeService {
    /// Inserts a new employee and returns it
    pub async fn create(
        db: &DatabaseConnection,
        name: String,
        hire_date: NaiveDate,
    ) -> Result<employees::Model, ServiceError> {
        let employee = employees::Model {
            id: Uuid::new_v4(),
            name,
            hire_date,
        };

        employees::Entity::insert(employees::ActiveModel {
            id: Set(employee.id),
            name: Set(employee.name.clone()),
            hire_date: Set(employee.hire_date),
        })
        .exec(db)
        .await?;

        debug!("created employee {}", employee.id);
        Ok(employee)
    }

    /// Query employees with pagination and optional name filtering
    pub async fn get_employees_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        search: Option<String>,
    ) -> Result<(Vec<employees::Model>, u64), ServiceError> {
        let mut condition = Condition::all();

        if let Some(search) = search
            && !search.is_empty()
        {
            condition = condition.add(employees::Column::Name.contains(&search));
        }

        let query = employees::Entity::find()
            .filter(condition)
            .order_by_asc(employees::Column::Name);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let employees = paginator.fetch_page(page - 1).await?; // SeaORM uses 0-based pages

        Ok((employees, total_items))
    }

    /// Get a single employee with their meetings and project assignments
    pub async fn get_employee_by_id(
        db: &DatabaseConnection,
        employee_id: Uuid,
    ) -> Result<Option<EmployeeDetail>, ServiceError> {
        let employee = match employees::Entity::find_by_id(employee_id).one(db).await? {
            Some(employee) => employee,
            None => return Ok(None),
        };

        let (meetings, assignments) = futures::try_join!(
            employee
                .find_related(meetings::Entity)
                .order_by_asc(meetings::Column::ScheduledTime)
                .all(db),
            assignments::Entity::find()
                .filter(assignments::Column::EmployeeId.eq(employee_id))
                .order_by_asc(assignments::Column::StartDate)
                .find_also_related(projects::Entity)
                .all(db)
        )?;

        let assignments = assignments
            .into_iter()
            .filter_map(|(assignment, project)| project.map(|p| (assignment, p)))
            .collect();

        Ok(Some((employee, meetings, assignments)))
    }

    /// Deletes an employee. Their attendance rows and assignments go with
    /// them through ON DELETE CASCADE.
    pub async fn delete(db: &DatabaseConnection, employee_id: Uuid) -> Result<(), ServiceError> {
        let result = employees::Entity::delete_by_id(employee_id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::EmployeeNotFound(employee_id));
        }

        debug!("deleted employee {employee_id}");
        Ok(())
    }
}
