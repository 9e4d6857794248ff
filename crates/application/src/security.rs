//! Security services consumed by the user use cases.

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Identity carried by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: String,
    pub username: String,
}

/// One-way password hashing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored hash. Malformed hashes never match.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Access token issuing and verification.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, user_id: &str, username: &str) -> AppResult<String>;

    fn verify_token(&self, token: &str) -> AppResult<TokenClaims>;
}
