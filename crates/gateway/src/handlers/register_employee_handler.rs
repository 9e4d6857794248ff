//! Employee registration handlers.

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use application::Restorer;
use common::AppResult;
use domain::{Department, Employee};

use crate::adapters::RequestAdapter;
use crate::extractors::ValidatedJson;
use crate::handlers::employee_payloads::{
    DepartmentQuery, DepartmentVerification, EmployeeChangeResponse, RegisterEmployeeRequest,
};
use crate::middleware::CurrentUser;
use crate::state::AppState;

pub fn register_employee_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_employee))
        .route("/register/departments", get(list_departments))
        .route("/register/verify-department", get(verify_department))
}

/// Departments to choose from
#[utoipa::path(
    get,
    path = "/api/employees/register/departments",
    operation_id = "register_list_departments",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All departments", body = Vec<Department>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_departments(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = state.use_cases.register_employee().get_departments().await?;
    Ok(Json(departments))
}

/// Check that a department exists
#[utoipa::path(
    get,
    path = "/api/employees/register/verify-department",
    operation_id = "register_verify_department",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(DepartmentQuery),
    responses(
        (status = 200, description = "`true`, or the reason the department cannot be used", body = DepartmentVerification),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn verify_department(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> AppResult<Json<DepartmentVerification>> {
    let lookup = state
        .use_cases
        .register_employee()
        .get_department_by_id(&query.department_id)
        .await;
    Ok(Json(DepartmentVerification::from_lookup(lookup)?))
}

/// Register a new employee
#[utoipa::path(
    post,
    path = "/api/employees/register",
    tag = "Employees",
    security(("bearer_auth" = [])),
    request_body = RegisterEmployeeRequest,
    responses(
        (status = 201, description = "Employee registered", body = EmployeeChangeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Department does not exist")
    )
)]
pub async fn register_employee(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeChangeResponse>)> {
    let use_case = state.use_cases.register_employee();

    let mut employee: Employee = RequestAdapter.restore(&payload)?;
    let department = use_case.get_department_by_id(&payload.department_id).await?;
    employee.change_department(Some(department));

    use_case.register_employee(&employee).await?;
    tracing::info!(employee_id = %employee.id(), by = %current_user.username, "Employee registered");

    Ok((
        StatusCode::CREATED,
        Json(EmployeeChangeResponse {
            message: format!("Employee '{}' registered", employee.name()),
            employee,
        }),
    ))
}
