use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use application::{DepartmentRepository, Restorer};
use common::{AppError, AppResult};
use domain::Department;

use crate::adapters::DepartmentEntityAdapter;
use crate::entities::department::{self, Entity as DepartmentEntity};
use crate::session::{on_session, DbSession};

/// Concrete implementation of DepartmentRepository
pub struct DepartmentStore {
    session: Arc<DbSession>,
    adapter: DepartmentEntityAdapter,
}

impl DepartmentStore {
    pub fn new(session: Arc<DbSession>, adapter: DepartmentEntityAdapter) -> Self {
        Self { session, adapter }
    }
}

#[async_trait]
impl DepartmentRepository for DepartmentStore {
    async fn select_all(&self) -> AppResult<Vec<Department>> {
        let query = DepartmentEntity::find().order_by_asc(department::Column::Id);
        let models = on_session!(self.session, |conn| query.all(conn).await)
            .map_err(|e| AppError::internal_with("Failed to fetch departments", e))?;

        self.adapter.restore_all(&models)
    }

    async fn select_by_id(&self, id: &str) -> AppResult<Option<Department>> {
        let query = DepartmentEntity::find().filter(department::Column::PublicId.eq(id));
        let model = on_session!(self.session, |conn| query.one(conn).await).map_err(|e| {
            AppError::internal_with(format!("Failed to fetch department. id={}", id), e)
        })?;

        model.map(|m| self.adapter.restore(&m)).transpose()
    }
}
