use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub budget: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

// Many-to-many relationship with employees, through the assignments table
impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::assignment::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::assignment::Relation::Project.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
