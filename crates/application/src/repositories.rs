//! Repository contracts.
//!
//! Absence is reported through `Option` and `bool`; an `Err` always means the
//! store itself failed, wrapped as `AppError::Internal` with the operation and
//! key that were attempted.

use async_trait::async_trait;

use common::AppResult;
use domain::{Department, Employee, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to departments.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// All departments, ordered by creation
    async fn select_all(&self) -> AppResult<Vec<Department>>;

    /// Department by id
    async fn select_by_id(&self, id: &str) -> AppResult<Option<Department>>;
}

/// Employee persistence. Reads return employees together with their department.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee
    async fn create(&self, employee: &Employee) -> AppResult<()>;

    /// Update name and department; `false` when no row has the employee's id
    async fn update_by_id(&self, employee: &Employee) -> AppResult<bool>;

    /// Delete by id; `false` when no row has the id
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    /// Employees whose name contains the keyword
    async fn select_by_name_like(&self, keyword: &str) -> AppResult<Vec<Employee>>;

    /// Employee by id
    async fn select_by_id(&self, id: &str) -> AppResult<Option<Employee>>;
}

/// User account persistence.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Users are never updated through this contract.
    async fn save(&self, user: &User) -> AppResult<()>;

    /// Whether the username or the email is already taken
    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<bool>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// User whose username or email equals the given value
    async fn find_by_username_or_email(&self, username_or_email: &str)
        -> AppResult<Option<User>>;
}
