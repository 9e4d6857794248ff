use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};

use application::{Converter, Restorer, UserRepository};
use common::{AppError, AppResult};
use domain::User;

use crate::adapters::UserEntityAdapter;
use crate::entities::user::{self, Entity as UserEntity};
use crate::session::{on_session, DbSession};

/// Concrete implementation of UserRepository
pub struct UserStore {
    session: Arc<DbSession>,
    adapter: UserEntityAdapter,
}

impl UserStore {
    pub fn new(session: Arc<DbSession>, adapter: UserEntityAdapter) -> Self {
        Self { session, adapter }
    }

    async fn find_one(&self, condition: Condition, what: String) -> AppResult<Option<User>> {
        let query = UserEntity::find().filter(condition);
        let model = on_session!(self.session, |conn| query.one(conn).await)
            .map_err(|e| AppError::internal_with(format!("Failed to fetch user. {}", what), e))?;

        model.map(|m| self.adapter.restore(&m)).transpose()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: &User) -> AppResult<()> {
        let model = self.adapter.convert(user)?;
        let insert = UserEntity::insert(model.into_new_active_model());

        on_session!(self.session, |conn| insert.exec_without_returning(conn).await)
            .map_err(|e| AppError::internal_with(format!("Failed to save user. {}", user), e))?;

        Ok(())
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<bool> {
        let query = UserEntity::find().filter(
            Condition::any()
                .add(user::Column::Username.eq(username))
                .add(user::Column::Email.eq(email)),
        );

        let model = on_session!(self.session, |conn| query.one(conn).await).map_err(|e| {
            AppError::internal_with(
                format!(
                    "Failed to check user existence. username={}, email={}",
                    username, email
                ),
                e,
            )
        })?;

        Ok(model.is_some())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(
            Condition::all().add(user::Column::Email.eq(email)),
            format!("email={}", email),
        )
        .await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.find_one(
            Condition::all().add(user::Column::PublicId.eq(id)),
            format!("id={}", id),
        )
        .await
    }

    async fn find_by_username_or_email(
        &self,
        username_or_email: &str,
    ) -> AppResult<Option<User>> {
        self.find_one(
            Condition::any()
                .add(user::Column::Username.eq(username_or_email))
                .add(user::Column::Email.eq(username_or_email)),
            format!("username_or_email={}", username_or_email),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use std::error::Error as _;

    const USER_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

    fn store(db: MockDatabase) -> UserStore {
        UserStore::new(
            Arc::new(DbSession::new(db.into_connection())),
            UserEntityAdapter,
        )
    }

    fn user_row() -> user::Model {
        let now = Utc::now();
        user::Model {
            id: 1,
            public_id: USER_ID.to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
            salt: Some("c2FsdHNhbHQ".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_exists_by_username_or_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_row()]])
            .append_query_results([Vec::<user::Model>::new()]);
        let store = store(db);

        assert!(store
            .exists_by_username_or_email("alice", "other@example.com")
            .await
            .unwrap());
        assert!(!store
            .exists_by_username_or_email("bob", "bob@example.com")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_find_by_username_or_email_restores_user() {
        let db =
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![user_row()]]);

        let user = store(db)
            .find_by_username_or_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id(), USER_ID);
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password(), user_row().password_hash);
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()]);

        assert!(store(db).find_by_id(USER_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_inserts_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ]);
        let user = User::new("carol", "carol@example.com", "hash").unwrap();

        assert!(store(db).save(&user).await.is_ok());
    }

    #[tokio::test]
    async fn test_save_failure_names_the_user_and_keeps_the_cause() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("duplicate key".to_string())]);
        let user = User::new("carol", "carol@example.com", "hash").unwrap();

        let err = store(db).save(&user).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().starts_with("Failed to save user."));
        assert!(err.to_string().contains(user.id()));
        assert!(err.source().unwrap().to_string().contains("duplicate key"));
    }

    #[tokio::test]
    async fn test_lookup_failure_names_the_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("timeout".to_string())]);

        let err = store(db).find_by_email("alice@example.com").await.unwrap_err();

        assert!(err.to_string().contains("email=alice@example.com"));
        assert!(err.source().is_some());
    }
}
