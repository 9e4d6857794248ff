//! Argon2 password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};

use application::PasswordHasher;
use common::{AppError, AppResult};

/// Argon2id with the crate defaults. Hashes are PHC strings, salt included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Salt segment of a PHC hash string, if it has one.
    pub fn salt_of(hash: &str) -> Option<String> {
        PasswordHash::new(hash)
            .ok()
            .and_then(|parsed| parsed.salt.map(|salt| salt.as_str().to_string()))
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("correct horse", &hash));
        assert!(!hasher.verify("wrong horse", &hash));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password123").unwrap();

        assert_ne!(first, second);
        assert_ne!(
            Argon2PasswordHasher::salt_of(&first),
            Argon2PasswordHasher::salt_of(&second)
        );
    }

    #[test]
    fn test_salt_is_part_of_hash() {
        let hash = Argon2PasswordHasher::new().hash("password123").unwrap();
        let salt = Argon2PasswordHasher::salt_of(&hash).unwrap();
        assert!(hash.contains(&salt));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify("anything", "plaintext-not-a-hash"));
        assert_eq!(Argon2PasswordHasher::salt_of("plaintext-not-a-hash"), None);
    }
}
