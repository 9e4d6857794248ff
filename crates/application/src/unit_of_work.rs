//! Unit of Work contract and the transactional scope every write runs in.
//!
//! One unit of work belongs to one request scope. Repositories built for the
//! same scope share its transaction implicitly, so interactors only decide
//! where the boundary starts and ends.

use std::future::Future;

use async_trait::async_trait;

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Transaction boundary of a request scope.
///
/// `begin` is idempotent while a transaction is open. `commit` and `rollback`
/// end the transaction and clear it; both are no-ops when none is open.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin(&self) -> AppResult<()>;

    async fn commit(&self) -> AppResult<()>;

    async fn rollback(&self) -> AppResult<()>;
}

/// Run `work` inside a transaction.
///
/// The transaction is committed when `work` succeeds. On any failure,
/// including a failed commit, it is rolled back and the original error is
/// returned unchanged. A rollback failure is logged, never returned.
///
/// `work` is lazy: nothing in it runs before `begin` has succeeded.
pub async fn in_transaction<T, F>(unit_of_work: &dyn UnitOfWork, work: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>> + Send,
{
    unit_of_work.begin().await?;

    let result = match work.await {
        Ok(value) => unit_of_work.commit().await.map(|_| value),
        Err(e) => Err(e),
    };

    if result.is_err() {
        if let Err(rollback_err) = unit_of_work.rollback().await {
            tracing::error!("Transaction rollback failed: {}", rollback_err);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::Sequence;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_commits_on_success() {
        let mut uow = MockUnitOfWork::new();
        let mut seq = Sequence::new();
        uow.expect_begin()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        uow.expect_commit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        uow.expect_rollback().never();

        let value = assert_ok!(in_transaction(&uow, async { Ok(7) }).await);
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_rolls_back_and_keeps_original_error() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().times(1).returning(|| Ok(()));
        uow.expect_commit().never();
        uow.expect_rollback().times(1).returning(|| Ok(()));

        let result: AppResult<()> =
            in_transaction(&uow, async { Err(AppError::not_found("gone")) }).await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "gone"));
    }

    #[tokio::test]
    async fn test_rollback_failure_does_not_mask_error() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().returning(|| Ok(()));
        uow.expect_rollback()
            .times(1)
            .returning(|| Err(AppError::internal("rollback failed")));

        let result: AppResult<()> =
            in_transaction(&uow, async { Err(AppError::exists("dup")) }).await;

        assert!(matches!(result, Err(AppError::Exists(_))));
    }

    #[tokio::test]
    async fn test_failed_commit_is_rolled_back() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().returning(|| Ok(()));
        uow.expect_commit()
            .times(1)
            .returning(|| Err(AppError::internal("commit failed")));
        uow.expect_rollback().times(1).returning(|| Ok(()));

        let result = in_transaction(&uow, async { Ok(()) }).await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_work_does_not_run_when_begin_fails() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin()
            .returning(|| Err(AppError::internal("no connection")));
        uow.expect_commit().never();
        uow.expect_rollback().never();

        let ran = std::sync::atomic::AtomicBool::new(false);
        let result = in_transaction(&uow, async {
            ran.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        })
        .await;

        assert_err!(result);
        assert!(!ran.load(std::sync::atomic::Ordering::SeqCst));
    }
}
