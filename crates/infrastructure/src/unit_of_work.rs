//! SeaORM-backed unit of work.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::TransactionTrait;

use application::UnitOfWork;
use common::{AppError, AppResult};

use crate::session::DbSession;

/// Transaction boundary over a [`DbSession`].
pub struct SeaOrmUnitOfWork {
    session: Arc<DbSession>,
}

impl SeaOrmUnitOfWork {
    pub fn new(session: Arc<DbSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    async fn begin(&self) -> AppResult<()> {
        let mut active = self.session.active_transaction().await;
        if active.is_none() {
            let transaction = self
                .session
                .connection()
                .begin()
                .await
                .map_err(|e| AppError::internal_with("Failed to begin transaction", e))?;
            *active = Some(transaction);
            tracing::debug!("Transaction started");
        }
        Ok(())
    }

    async fn commit(&self) -> AppResult<()> {
        let transaction = self.session.active_transaction().await.take();
        if let Some(transaction) = transaction {
            transaction
                .commit()
                .await
                .map_err(|e| AppError::internal_with("Failed to commit transaction", e))?;
            tracing::debug!("Transaction committed");
        }
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        let transaction = self.session.active_transaction().await.take();
        if let Some(transaction) = transaction {
            transaction
                .rollback()
                .await
                .map_err(|e| AppError::internal_with("Failed to roll back transaction", e))?;
            tracing::debug!("Transaction rolled back");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tokio_test::assert_ok;

    fn session() -> Arc<DbSession> {
        Arc::new(DbSession::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        ))
    }

    #[tokio::test]
    async fn test_commit_and_rollback_without_transaction_are_noops() {
        let uow = SeaOrmUnitOfWork::new(session());
        assert_ok!(uow.commit().await);
        assert_ok!(uow.rollback().await);
    }

    #[tokio::test]
    async fn test_begin_is_idempotent_and_commit_clears() {
        let session = session();
        let uow = SeaOrmUnitOfWork::new(session.clone());

        assert_ok!(uow.begin().await);
        assert_ok!(uow.begin().await);
        assert!(session.has_transaction().await);

        assert_ok!(uow.commit().await);
        assert!(!session.has_transaction().await);
        assert_ok!(uow.commit().await);
    }

    #[tokio::test]
    async fn test_rollback_clears_transaction() {
        let session = session();
        let uow = SeaOrmUnitOfWork::new(session.clone());

        assert_ok!(uow.begin().await);
        assert_ok!(uow.rollback().await);
        assert!(!session.has_transaction().await);

        // a new transaction can be opened after the previous one ended
        assert_ok!(uow.begin().await);
        assert!(session.has_transaction().await);
    }
}
