//! Conversions between domain entities and SeaORM models.
//!
//! Stored rows are trusted only as far as the domain rules allow: restoring a
//! row that violates them fails with `AppError::Internal`.

mod department_adapter;
mod employee_adapter;
mod employee_factory;
mod user_adapter;

pub use department_adapter::DepartmentEntityAdapter;
pub use employee_adapter::EmployeeEntityAdapter;
pub use employee_factory::{EmployeeFactory, EmployeeRecord};
pub use user_adapter::UserEntityAdapter;

/// Surrogate key of a model that has not been inserted yet.
pub const UNSAVED_ID: i32 = 0;
