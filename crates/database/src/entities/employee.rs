use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub hire_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_meeting::Entity")]
    EmployeeMeetings,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
}

impl Related<super::employee_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeMeetings.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

// Many-to-many relationship with meetings
impl Related<super::meeting::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_meeting::Relation::Meeting.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_meeting::Relation::Employee.def().rev())
    }
}

// Many-to-many relationship with projects, through the assignments table
impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        super::assignment::Relation::Project.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::assignment::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
