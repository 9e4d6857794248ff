use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::{Department, Employee};

use super::{ensure_department_exists, find_department};
use crate::repositories::{DepartmentRepository, EmployeeRepository};
use crate::unit_of_work::{in_transaction, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee registration and the department lookups the registration form needs.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegisterEmployeeUseCase: Send + Sync {
    async fn get_departments(&self) -> AppResult<Vec<Department>>;

    /// Department by id, `NotFound` when absent
    async fn get_department_by_id(&self, id: &str) -> AppResult<Department>;

    /// Persist a new employee. Its department must exist.
    async fn register_employee(&self, employee: &Employee) -> AppResult<()>;
}

pub struct RegisterEmployeeInteractor {
    departments: Arc<dyn DepartmentRepository>,
    employees: Arc<dyn EmployeeRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl RegisterEmployeeInteractor {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        employees: Arc<dyn EmployeeRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            departments,
            employees,
            unit_of_work,
        }
    }
}

#[async_trait]
impl RegisterEmployeeUseCase for RegisterEmployeeInteractor {
    async fn get_departments(&self) -> AppResult<Vec<Department>> {
        self.departments.select_all().await
    }

    async fn get_department_by_id(&self, id: &str) -> AppResult<Department> {
        find_department(self.departments.as_ref(), id).await
    }

    async fn register_employee(&self, employee: &Employee) -> AppResult<()> {
        ensure_department_exists(self.departments.as_ref(), employee).await?;

        in_transaction(self.unit_of_work.as_ref(), async {
            self.employees.create(employee).await
        })
        .await?;

        tracing::info!(employee_id = %employee.id(), "Employee registered");
        Ok(())
    }
}
