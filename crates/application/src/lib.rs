//! Application layer - use cases and the ports they depend on.
//!
//! Interactors orchestrate domain entities, repositories, the unit of work
//! and the security services. Every collaborator is a trait object injected
//! through the interactor's constructor; concrete implementations live in the
//! infrastructure crate.

pub mod adapters;
pub mod repositories;
pub mod security;
pub mod unit_of_work;
pub mod usecases;

pub use adapters::{Converter, Restorer};
pub use repositories::{DepartmentRepository, EmployeeRepository, UserRepository};
pub use security::{PasswordHasher, TokenClaims, TokenProvider};
pub use unit_of_work::{in_transaction, UnitOfWork};
pub use usecases::*;
