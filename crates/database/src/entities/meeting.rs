use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meetings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub topic: String,
    pub scheduled_time: DateTime,
    pub location: String, // e.g. "Building A, Room 142"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_meeting::Entity")]
    EmployeeMeetings,
}

impl Related<super::employee_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeMeetings.def()
    }
}

// Many-to-many relationship with employees
impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::employee_meeting::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::employee_meeting::Relation::Meeting.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
