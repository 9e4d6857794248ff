//! SeaORM repository implementations.
//!
//! Stores run on a shared [`DbSession`](crate::session::DbSession), so they
//! take part in whatever transaction the request's unit of work has open.

mod department_repository;
mod employee_repository;
mod user_repository;

pub use department_repository::DepartmentStore;
pub use employee_repository::EmployeeStore;
pub use user_repository::UserStore;
