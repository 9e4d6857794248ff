//! Concrete security services.

mod jwt_provider;
mod password_hasher;

pub use jwt_provider::{Claims, JwtTokenProvider};
pub use password_hasher::Argon2PasswordHasher;
