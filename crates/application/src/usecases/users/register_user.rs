use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::User;

use crate::repositories::UserRepository;
use crate::security::PasswordHasher;
use crate::unit_of_work::{in_transaction, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    /// `Exists` when the username or the email is already registered
    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<()>;

    /// Register a user whose password is still plaintext.
    /// Returns the stored user, carrying the password hash.
    async fn register_user(&self, user: User) -> AppResult<User>;
}

pub struct RegisterUserInteractor {
    users: Arc<dyn UserRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserInteractor {
    pub fn new(
        users: Arc<dyn UserRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            unit_of_work,
            hasher,
        }
    }
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserInteractor {
    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<()> {
        if self.users.exists_by_username_or_email(username, email).await? {
            return Err(AppError::exists(format!(
                "User already exists. username={}, email={}",
                username, email
            )));
        }
        Ok(())
    }

    async fn register_user(&self, mut user: User) -> AppResult<User> {
        self.exists_by_username_or_email(user.username(), user.email())
            .await?;

        let hash = self.hasher.hash(user.password())?;
        user.change_password(&hash)?;

        in_transaction(self.unit_of_work.as_ref(), async {
            self.users.save(&user).await
        })
        .await?;

        tracing::info!(user_id = %user.id(), username = %user.username(), "User registered");
        Ok(user)
    }
}
