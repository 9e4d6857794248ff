//! User handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use application::Restorer;
use common::AppResult;
use domain::User;

use crate::adapters::RequestAdapter;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User registration request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be 3 to 20 characters"))]
    #[schema(example = "jdoe")]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[validate(length(min = 6, max = 100, message = "Password must be 6 to 100 characters"))]
    #[schema(example = "secret1")]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    #[schema(example = "secret1")]
    pub confirm_password: String,
}

/// Public view of a user. Never includes the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserResponse {
    pub message: String,
    pub user: UserView,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisteredUserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<RegisteredUserResponse>)> {
    let user: User = RequestAdapter.restore(&payload)?;
    let user = state.use_cases.register_user().register_user(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUserResponse {
            message: format!("User '{}' registered", user.username()),
            user: UserView::from(&user),
        }),
    ))
}
