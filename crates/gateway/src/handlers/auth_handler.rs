//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use application::Restorer;
use common::AppResult;
use domain::{LoginUser, TOKEN_TYPE_BEARER};

use crate::adapters::RequestAdapter;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Login request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username or email address
    #[validate(length(min = 1, max = 100, message = "Username or email is required"))]
    #[schema(example = "jdoe")]
    pub username_or_email: String,
    #[validate(length(min = 1, max = 100, message = "Password is required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Issued access token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
}

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unknown user or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let credentials: LoginUser = RequestAdapter.restore(&payload)?;
    let token = state.use_cases.login_user().login(&credentials).await?;

    Ok(Json(TokenResponse {
        token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
    }))
}
