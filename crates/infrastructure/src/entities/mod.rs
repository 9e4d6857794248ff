//! SeaORM entities.
//!
//! Every table has an integer surrogate key that never leaves this crate and
//! a `char(36)` UUID column that carries the domain identity.

pub mod department;
pub mod employee;
pub mod user;
