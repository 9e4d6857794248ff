//! Employee search handler.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult};
use domain::Employee;

use crate::handlers::employee_payloads::SearchQuery;
use crate::state::AppState;

pub fn search_employee_routes() -> Router<AppState> {
    Router::new().route("/search", get(search_employees))
}

/// Employees whose name contains the keyword
#[utoipa::path(
    get,
    path = "/api/employees/search",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching employees", body = Vec<Employee>),
        (status = 400, description = "Blank keyword"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No employee matched")
    )
)]
pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let keyword = query.keyword.trim();
    if keyword.is_empty() {
        return Err(AppError::BadRequest("keyword must not be blank".to_string()));
    }

    let employees = state.use_cases.search_employees().execute(keyword).await?;
    Ok(Json(employees))
}
