//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "user_id")]
    pub id: i32,
    #[sea_orm(column_name = "user_uuid", unique)]
    pub public_id: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    /// Salt segment of the hash, kept for reference only
    pub salt: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
            username: Set(self.username),
            email: Set(self.email),
            password_hash: Set(self.password_hash),
            salt: Set(self.salt),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
