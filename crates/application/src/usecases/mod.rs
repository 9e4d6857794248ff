//! Interactors, one per use case.

pub mod employees;
pub mod users;

pub use employees::*;
pub use users::*;
