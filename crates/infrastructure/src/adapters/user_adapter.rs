use chrono::Utc;

use application::{Converter, Restorer};
use common::{AppError, AppResult};
use domain::User;

use super::UNSAVED_ID;
use crate::entities::user;
use crate::security::Argon2PasswordHasher;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserEntityAdapter;

impl Converter<User, user::Model> for UserEntityAdapter {
    fn convert(&self, domain: &User) -> AppResult<user::Model> {
        let now = Utc::now();
        Ok(user::Model {
            id: UNSAVED_ID,
            public_id: domain.id().to_string(),
            username: domain.username().to_string(),
            email: domain.email().to_string(),
            password_hash: domain.password().to_string(),
            salt: Argon2PasswordHasher::salt_of(domain.password()),
            created_at: now,
            updated_at: now,
        })
    }
}

impl Restorer<User, user::Model> for UserEntityAdapter {
    fn restore(&self, target: &user::Model) -> AppResult<User> {
        User::with_id(
            &target.public_id,
            &target.username,
            &target.email,
            &target.password_hash,
        )
        .map_err(|e| {
            AppError::internal_with(format!("Stored user is invalid. user_id={}", target.id), e)
        })
    }
}
