//! Employee use cases.

mod delete_employee;
mod register_employee;
mod search_employees;
mod update_employee;

pub use delete_employee::{DeleteEmployeeInteractor, DeleteEmployeeUseCase};
pub use register_employee::{RegisterEmployeeInteractor, RegisterEmployeeUseCase};
pub use search_employees::{SearchEmployeesByKeywordInteractor, SearchEmployeesByKeywordUseCase};
pub use update_employee::{UpdateEmployeeInteractor, UpdateEmployeeUseCase};

#[cfg(any(test, feature = "test-utils"))]
pub use delete_employee::MockDeleteEmployeeUseCase;
#[cfg(any(test, feature = "test-utils"))]
pub use register_employee::MockRegisterEmployeeUseCase;
#[cfg(any(test, feature = "test-utils"))]
pub use search_employees::MockSearchEmployeesByKeywordUseCase;
#[cfg(any(test, feature = "test-utils"))]
pub use update_employee::MockUpdateEmployeeUseCase;

use common::{AppResult, OptionExt};
use domain::{Department, Employee};

use crate::repositories::{DepartmentRepository, EmployeeRepository};

async fn find_department(repo: &dyn DepartmentRepository, id: &str) -> AppResult<Department> {
    repo.select_by_id(id)
        .await?
        .ok_or_not_found(format!("Department does not exist. id={}", id))
}

async fn find_employee(repo: &dyn EmployeeRepository, id: &str) -> AppResult<Employee> {
    repo.select_by_id(id)
        .await?
        .ok_or_not_found(format!("Employee does not exist. id={}", id))
}

/// The employee's department must be assigned and must exist in the store.
async fn ensure_department_exists(
    repo: &dyn DepartmentRepository,
    employee: &Employee,
) -> AppResult<()> {
    let department = employee.require_department()?;
    find_department(repo, department.id()).await?;
    Ok(())
}
