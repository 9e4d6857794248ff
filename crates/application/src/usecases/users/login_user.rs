use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::LoginUser;

use crate::repositories::UserRepository;
use crate::security::{PasswordHasher, TokenProvider};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    /// Authenticate and issue an access token.
    async fn login(&self, credentials: &LoginUser) -> AppResult<String>;
}

pub struct LoginUserInteractor {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginUserInteractor {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginUserUseCase for LoginUserInteractor {
    async fn login(&self, credentials: &LoginUser) -> AppResult<String> {
        let user = self
            .users
            .find_by_username_or_email(credentials.username_or_email())
            .await?
            .ok_or_else(|| {
                tracing::warn!(login = %credentials.username_or_email(), "Login for unknown user");
                AppError::authentication(format!(
                    "No user with username or email '{}' exists",
                    credentials.username_or_email()
                ))
            })?;

        if !self.hasher.verify(credentials.password(), user.password()) {
            tracing::warn!(user_id = %user.id(), "Login with incorrect password");
            return Err(AppError::authentication("The password is incorrect"));
        }

        self.tokens.generate_token(user.id(), user.username())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use crate::security::{MockPasswordHasher, MockTokenProvider};
    use domain::User;
    use mockall::predicate::eq;

    const USER_ID: &str = "1b4e28ba-2fa1-41d2-883f-0016d3cca427";

    fn stored_user() -> User {
        User::with_id(USER_ID, "alice", "alice@example.com", "stored-hash").unwrap()
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username_or_email()
            .with(eq("alice@example.com"))
            .returning(|_| Ok(Some(stored_user())));
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .with(eq("secret"), eq("stored-hash"))
            .returning(|_, _| true);
        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_generate_token()
            .with(eq(USER_ID), eq("alice"))
            .times(1)
            .returning(|_, _| Ok("signed.jwt.token".to_string()));

        let interactor =
            LoginUserInteractor::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens));
        let token = interactor
            .login(&LoginUser::new("alice@example.com", "secret"))
            .await
            .unwrap();

        assert_eq!(token, "signed.jwt.token");
    }

    #[tokio::test]
    async fn test_login_unknown_user_fails_authentication() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username_or_email()
            .returning(|_| Ok(None));
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().never();
        let mut tokens = MockTokenProvider::new();
        tokens.expect_generate_token().never();

        let interactor =
            LoginUserInteractor::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens));
        let err = interactor
            .login(&LoginUser::new("nobody", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authentication(msg) if msg.contains("nobody")));
    }

    #[tokio::test]
    async fn test_login_wrong_password_fails_authentication() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username_or_email()
            .returning(|_| Ok(Some(stored_user())));
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().returning(|_, _| false);
        let mut tokens = MockTokenProvider::new();
        tokens.expect_generate_token().never();

        let interactor =
            LoginUserInteractor::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens));
        let err = interactor
            .login(&LoginUser::new("alice", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
    }
}
