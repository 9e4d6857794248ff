//! Infrastructure layer - SeaORM persistence and security services.
//!
//! Implements the ports declared by the application crate:
//! - Entities, adapters and repositories over PostgreSQL
//! - A session-scoped unit of work
//! - Argon2 password hashing and JWT tokens
//! - Connection management and migrations

pub mod adapters;
pub mod db;
pub mod entities;
pub mod persistence;
pub mod repositories;
pub mod security;
pub mod session;
pub mod unit_of_work;

pub use db::Database;
pub use persistence::{Persistence, PersistenceScope};
pub use security::{Argon2PasswordHasher, JwtTokenProvider};
pub use session::DbSession;
pub use unit_of_work::SeaOrmUnitOfWork;
