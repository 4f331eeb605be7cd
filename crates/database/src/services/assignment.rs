use crate::entities::{assignments, employees, projects};
use crate::error::ServiceError;
use chrono::NaiveDateTime;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

/// An assignment with the employee and project on each end
pub type AssignmentDetail = (assignments::Model, employees::Model, projects::Model);

pub struct AssignmentService;

impl AssignmentService {
    /// Creates an assignment linking an employee to a project. Both endpoints
    /// must already exist.
    pub async fn create(
        db: &DatabaseConnection,
        role: String,
        start_date: NaiveDateTime,
        end_date: Option<NaiveDateTime>,
        employee_id: Uuid,
        project_id: Uuid,
    ) -> Result<assignments::Model, ServiceError> {
        if employees::Entity::find_by_id(employee_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::EmployeeNotFound(employee_id));
        }

        if projects::Entity::find_by_id(project_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::ProjectNotFound(project_id));
        }

        let assignment = assignments::Model {
            id: Uuid::new_v4(),
            role,
            start_date,
            end_date,
            employee_id,
            project_id,
        };

        assignments::Entity::insert(assignments::ActiveModel {
            id: Set(assignment.id),
            role: Set(assignment.role.clone()),
            start_date: Set(assignment.start_date),
            end_date: Set(assignment.end_date),
            employee_id: Set(assignment.employee_id),
            project_id: Set(assignment.project_id),
        })
        .exec(db)
        .await?;

        debug!(
            "assigned employee {} to project {} as {}",
            assignment.employee_id, assignment.project_id, assignment.role
        );
        Ok(assignment)
    }

    /// Query assignments, optionally narrowed to one employee or one project,
    /// with both endpoints resolved
    pub async fn get_assignments(
        db: &DatabaseConnection,
        employee_id: Option<Uuid>,
        project_id: Option<Uuid>,
    ) -> Result<Vec<AssignmentDetail>, ServiceError> {
        let mut condition = Condition::all();

        if let Some(employee_id) = employee_id {
            condition = condition.add(assignments::Column::EmployeeId.eq(employee_id));
        }

        if let Some(project_id) = project_id {
            condition = condition.add(assignments::Column::ProjectId.eq(project_id));
        }

        let assignments = assignments::Entity::find()
            .filter(condition)
            .order_by_asc(assignments::Column::StartDate)
            .all(db)
            .await?;

        if assignments.is_empty() {
            return Ok(vec![]);
        }

        let employee_ids: Vec<Uuid> = assignments.iter().map(|a| a.employee_id).collect();
        let project_ids: Vec<Uuid> = assignments.iter().map(|a| a.project_id).collect();

        // Batch fetch both endpoints
        let (employees, projects) = futures::try_join!(
            employees::Entity::find()
                .filter(employees::Column::Id.is_in(employee_ids))
                .all(db),
            projects::Entity::find()
                .filter(projects::Column::Id.is_in(project_ids))
                .all(db)
        )?;

        // Build lookup maps; the same employee or project can appear on
        // several assignments
        let employees_by_id: HashMap<Uuid, employees::Model> =
            employees.into_iter().map(|e| (e.id, e)).collect();
        let projects_by_id: HashMap<Uuid, projects::Model> =
            projects.into_iter().map(|p| (p.id, p)).collect();

        let mut results = Vec::new();
        for assignment in assignments {
            let employee = employees_by_id.get(&assignment.employee_id).cloned();
            let project = projects_by_id.get(&assignment.project_id).cloned();

            if let (Some(employee), Some(project)) = (employee, project) {
                results.push((assignment, employee, project));
            }
        }

        Ok(results)
    }

    /// Updates the role and period of an assignment. Fields left as None are
    /// kept as they are.
    pub async fn update(
        db: &DatabaseConnection,
        assignment_id: Uuid,
        role: Option<String>,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<assignments::Model, ServiceError> {
        let existing = match assignments::Entity::find_by_id(assignment_id).one(db).await? {
            Some(assignment) => assignment,
            None => return Err(ServiceError::AssignmentNotFound(assignment_id)),
        };

        if role.is_none() && start_date.is_none() && end_date.is_none() {
            return Ok(existing);
        }

        let mut active: assignments::ActiveModel = existing.into();
        if let Some(role) = role {
            active.role = Set(role);
        }
        if let Some(start_date) = start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = end_date {
            active.end_date = Set(Some(end_date));
        }

        Ok(active.update(db).await?)
    }

    /// Deletes a single assignment; the employee and project are kept
    pub async fn delete(db: &DatabaseConnection, assignment_id: Uuid) -> Result<(), ServiceError> {
        let result = assignments::Entity::delete_by_id(assignment_id)
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::AssignmentNotFound(assignment_id));
        }

        debug!("deleted assignment {assignment_id}");
        Ok(())
    }
}
