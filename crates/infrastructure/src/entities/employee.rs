//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "emp_id")]
    pub id: i32,
    #[sea_orm(column_name = "emp_uuid", unique)]
    pub public_id: String,
    #[sea_orm(column_name = "emp_name")]
    pub name: String,
    /// References `department.dept_uuid`; cleared when the department is deleted
    #[sea_orm(column_name = "dept_uuid")]
    pub department_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::PublicId",
        on_delete = "SetNull"
    )]
    Department,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Active model for an insert; the surrogate key is left to the database.
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            public_id: Set(self.public_id),
            name: Set(self.name),
            department_id: Set(self.department_id),
        }
    }
}
