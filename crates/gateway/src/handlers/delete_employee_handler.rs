//! Employee deletion handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::Employee;

use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}

pub fn delete_employee_routes() -> Router<AppState> {
    Router::new().route(
        "/delete/:employee_id",
        get(get_employee).delete(delete_employee),
    )
}

/// Employee to confirm deletion of
#[utoipa::path(
    get,
    path = "/api/employees/delete/{employee_id}",
    operation_id = "delete_get_employee",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .use_cases
        .delete_employee()
        .get_employee_by_id(&employee_id)
        .await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employees/delete/{employee_id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = DeletedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    state
        .use_cases
        .delete_employee()
        .delete_employee(&employee_id)
        .await?;
    tracing::info!(employee_id = %employee_id, by = %current_user.username, "Employee deleted");

    Ok(Json(DeletedResponse {
        message: format!("Employee {} deleted", employee_id),
    }))
}
