//! Department database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "dept_id")]
    pub id: i32,
    #[sea_orm(column_name = "dept_uuid", unique)]
    pub public_id: String,
    #[sea_orm(column_name = "dept_name")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Active model for an insert; the surrogate key is left to the database.
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            public_id: Set(self.public_id),
            name: Set(self.name),
        }
    }
}
