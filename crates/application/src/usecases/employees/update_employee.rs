use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{Department, Employee};

use super::{ensure_department_exists, find_department, find_employee};
use crate::repositories::{DepartmentRepository, EmployeeRepository};
use crate::unit_of_work::{in_transaction, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Changing an employee's name or department.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UpdateEmployeeUseCase: Send + Sync {
    async fn get_departments(&self) -> AppResult<Vec<Department>>;

    async fn get_department_by_id(&self, id: &str) -> AppResult<Department>;

    async fn get_employee_by_id(&self, id: &str) -> AppResult<Employee>;

    /// Store the employee's current name and department.
    async fn update_employee(&self, employee: &Employee) -> AppResult<()>;
}

pub struct UpdateEmployeeInteractor {
    departments: Arc<dyn DepartmentRepository>,
    employees: Arc<dyn EmployeeRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateEmployeeInteractor {
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
impl UpdateEmployeeUseCase for UpdateEmployeeInteractor {
    async fn get_departments(&self) -> AppResult<Vec<Department>> {
        self.departments.select_all().await
    }

    async fn get_department_by_id(&self, id: &str) -> AppResult<Department> {
        find_department(self.departments.as_ref(), id).await
    }

    async fn get_employee_by_id(&self, id: &str) -> AppResult<Employee> {
        find_employee(self.employees.as_ref(), id).await
    }

    async fn update_employee(&self, employee: &Employee) -> AppResult<()> {
        ensure_department_exists(self.departments.as_ref(), employee).await?;

        in_transaction(self.unit_of_work.as_ref(), async {
            if self.employees.update_by_id(employee).await? {
                Ok(())
            } else {
                Err(AppError::not_found(format!(
                    "Employee does not exist. id={}",
                    employee.id()
                )))
            }
        })
        .await?;

        tracing::info!(employee_id = %employee.id(), "Employee updated");
        Ok(())
    }
}
