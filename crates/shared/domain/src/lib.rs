//! Domain layer - Core business entities.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every entity validates itself on construction and on each mutation, so an
//! instance that exists is always consistent.

pub mod constants;
pub mod department;
pub mod employee;
pub mod error;
mod rules;
pub mod user;

pub use constants::*;
pub use department::Department;
pub use employee::Employee;
pub use error::{DomainError, DomainResult};
pub use user::{LoginUser, User};
