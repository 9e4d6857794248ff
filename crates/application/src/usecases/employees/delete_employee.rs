use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::Employee;

use super::find_employee;
use crate::repositories::EmployeeRepository;
use crate::unit_of_work::{in_transaction, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DeleteEmployeeUseCase: Send + Sync {
    async fn get_employee_by_id(&self, id: &str) -> AppResult<Employee>;

    async fn delete_employee(&self, id: &str) -> AppResult<()>;
}

pub struct DeleteEmployeeInteractor {
    employees: Arc<dyn EmployeeRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl DeleteEmployeeInteractor {
    pub fn new(employees: Arc<dyn EmployeeRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            employees,
            unit_of_work,
        }
    }
}

#[async_trait]
impl DeleteEmployeeUseCase for DeleteEmployeeInteractor {
    async fn get_employee_by_id(&self, id: &str) -> AppResult<Employee> {
        find_employee(self.employees.as_ref(), id).await
    }

    async fn delete_employee(&self, id: &str) -> AppResult<()> {
        in_transaction(self.unit_of_work.as_ref(), async {
            if self.employees.delete_by_id(id).await? {
                Ok(())
            } else {
                Err(AppError::not_found(format!(
                    "Employee does not exist. id={}",
                    id
                )))
            }
        })
        .await?;

        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockEmployeeRepository;
    use crate::unit_of_work::MockUnitOfWork;
    use crate::usecases::employees::fixtures::{employee, EMPLOYEE_ID};
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[tokio::test]
    async fn test_delete_employee_success_commits() {
        let mut seq = Sequence::new();
        let mut uow = MockUnitOfWork::new();
        let mut employees = MockEmployeeRepository::new();
        uow.expect_begin()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        employees
            .expect_delete_by_id()
            .with(eq(EMPLOYEE_ID))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        uow.expect_commit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        uow.expect_rollback().never();

        let interactor = DeleteEmployeeInteractor::new(Arc::new(employees), Arc::new(uow));
        assert!(interactor.delete_employee(EMPLOYEE_ID).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_employee_rolls_back() {
        let mut seq = Sequence::new();
        let mut uow = MockUnitOfWork::new();
        let mut employees = MockEmployeeRepository::new();
        uow.expect_begin()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        employees
            .expect_delete_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        uow.expect_rollback()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        uow.expect_commit().never();

        let interactor = DeleteEmployeeInteractor::new(Arc::new(employees), Arc::new(uow));
        let err = interactor.delete_employee(EMPLOYEE_ID).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg.contains(EMPLOYEE_ID)));
    }

    #[tokio::test]
    async fn test_delete_store_failure_propagates() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().returning(|| Ok(()));
        uow.expect_rollback().times(1).returning(|| Ok(()));
        uow.expect_commit().never();

        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_delete_by_id()
            .returning(|id| Err(AppError::internal(format!("Failed to delete employee. id={}", id))));

        let interactor = DeleteEmployeeInteractor::new(Arc::new(employees), Arc::new(uow));
        let err = interactor.delete_employee(EMPLOYEE_ID).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_employee_by_id_never_opens_transaction() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().never();
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_select_by_id()
            .returning(|_| Ok(Some(employee())));

        let interactor = DeleteEmployeeInteractor::new(Arc::new(employees), Arc::new(uow));
        let found = interactor.get_employee_by_id(EMPLOYEE_ID).await.unwrap();

        assert_eq!(found, employee());
    }
}
