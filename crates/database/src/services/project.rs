use crate::entities::{assignments, employees, projects};
use crate::error::ServiceError;
use log::debug;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

pub struct ProjectService;

impl ProjectService {
    /// Inserts a new project and returns it
    pub async fn create(
        db: &DatabaseConnection,
        title: String,
        budget: i32,
    ) -> Result<projects::Model, ServiceError> {
        let project = projects::Model {
            id: Uuid::new_v4(),
            title,
            budget,
        };

        projects::Entity::insert(projects::ActiveModel {
            id: Set(project.id),
            title: Set(project.title.clone()),
            budget: Set(project.budget),
        })
        .exec(db)
        .await?;

        debug!("created project {}", project.id);
        Ok(project)
    }

    /// Query projects with pagination, ordered by title
    pub async fn get_projects_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<projects::Model>, u64), ServiceError> {
        let query = projects::Entity::find().order_by_asc(projects::Column::Title);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let projects = paginator.fetch_page(page - 1).await?; // SeaORM uses 0-based pages

        Ok((projects, total_items))
    }

    /// Get a single project with its staff, one entry per assignment
    pub async fn get_project_by_id(
        db: &DatabaseConnection,
        project_id: Uuid,
    ) -> Result<Option<(projects::Model, Vec<(assignments::Model, employees::Model)>)>, ServiceError>
    {
        let project = match projects::Entity::find_by_id(project_id).one(db).await? {
            Some(project) => project,
            None => return Ok(None),
        };

        let staff = assignments::Entity::find()
            .filter(assignments::Column::ProjectId.eq(project_id))
            .order_by_asc(assignments::Column::StartDate)
            .find_also_related(employees::Entity)
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(assignment, employee)| employee.map(|e| (assignment, e)))
            .collect();

        Ok(Some((project, staff)))
    }

    /// Deletes a project. Its assignments go with it through
    /// ON DELETE CASCADE; the assigned employees are kept.
    pub async fn delete(db: &DatabaseConnection, project_id: Uuid) -> Result<(), ServiceError> {
        let result = projects::Entity::delete_by_id(project_id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::ProjectNotFound(project_id));
        }

        debug!("deleted project {project_id}");
        Ok(())
    }
}
