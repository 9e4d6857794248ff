//! User account entity and login credentials.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::constants::{MAX_EMAIL_LENGTH, MAX_USERNAME_LENGTH};
use crate::error::{DomainError, DomainResult};
use crate::rules;

/// Registered user account.
///
/// `password` holds either the plaintext supplied at registration or, once
/// the account is persisted, the hash produced by the password hasher.
#[derive(Clone, Serialize)]
pub struct User {
    id: String,
    username: String,
    email: String,
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    /// Create a user with a freshly generated id.
    pub fn new(username: &str, email: &str, password: &str) -> DomainResult<Self> {
        Self::with_id(&rules::new_identity(), username, email, password)
    }

    /// Create a user with an explicit id.
    pub fn with_id(id: &str, username: &str, email: &str, password: &str) -> DomainResult<Self> {
        Ok(Self {
            id: rules::identity("User", id)?,
            username: validate_username(username)?,
            email: validate_email(email)?,
            password: validate_password(password)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn change_username(&mut self, username: &str) -> DomainResult<()> {
        self.username = validate_username(username)?;
        Ok(())
    }

    pub fn change_email(&mut self, email: &str) -> DomainResult<()> {
        self.email = validate_email(email)?;
        Ok(())
    }

    /// Replace the stored password material, typically with its hash.
    pub fn change_password(&mut self, password: &str) -> DomainResult<()> {
        self.password = validate_password(password)?;
        Ok(())
    }
}

fn validate_username(username: &str) -> DomainResult<String> {
    rules::bounded("username", username, MAX_USERNAME_LENGTH)
}

fn validate_email(email: &str) -> DomainResult<String> {
    let email = rules::bounded("email", email, MAX_EMAIL_LENGTH)?;
    if !email.contains('@') {
        return Err(DomainError::InvalidEmail(email));
    }
    Ok(email)
}

fn validate_password(password: &str) -> DomainResult<String> {
    if password.trim().is_empty() {
        return Err(DomainError::required("password"));
    }
    Ok(password.to_string())
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User id: {}, username: {}, email: {}",
            self.id, self.username, self.email
        )
    }
}

/// Credentials submitted at login. Not validated; the login use case decides.
#[derive(Clone)]
pub struct LoginUser {
    username_or_email: String,
    password: String,
}

impl LoginUser {
    pub fn new(username_or_email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username_or_email: username_or_email.into(),
            password: password.into(),
        }
    }

    pub fn username_or_email(&self) -> &str {
        &self.username_or_email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginUser")
            .field("username_or_email", &self.username_or_email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
