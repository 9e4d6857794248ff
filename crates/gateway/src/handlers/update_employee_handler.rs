//! Employee update handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};

use application::Restorer;
use common::AppResult;
use domain::{Department, Employee};

use crate::adapters::RequestAdapter;
use crate::extractors::ValidatedJson;
use crate::handlers::employee_payloads::{
    DepartmentQuery, DepartmentVerification, EmployeeChangeResponse, UpdateEmployeeRequest,
};
use crate::middleware::CurrentUser;
use crate::state::AppState;

pub fn update_employee_routes() -> Router<AppState> {
    Router::new()
        .route("/update", put(update_employee))
        .route("/update/departments", get(list_departments))
        .route("/update/verify-department", get(verify_department))
        .route("/update/:employee_id", get(get_employee))
}

/// Departments to move an employee to
#[utoipa::path(
    get,
    path = "/api/employees/update/departments",
    operation_id = "update_list_departments",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All departments", body = Vec<Department>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_departments(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = state.use_cases.update_employee().get_departments().await?;
    Ok(Json(departments))
}

/// Check that a department exists
#[utoipa::path(
    get,
    path = "/api/employees/update/verify-department",
    operation_id = "update_verify_department",
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
        .update_employee()
        .get_department_by_id(&query.department_id)
        .await;
    Ok(Json(DepartmentVerification::from_lookup(lookup)?))
}

/// Employee to edit
#[utoipa::path(
    get,
    path = "/api/employees/update/{employee_id}",
    operation_id = "update_get_employee",
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
        .update_employee()
        .get_employee_by_id(&employee_id)
        .await?;
    Ok(Json(employee))
}

/// Change an employee's name and department
#[utoipa::path(
    put,
    path = "/api/employees/update",
    tag = "Employees",
    security(("bearer_auth" = [])),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeChangeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee or department not found")
    )
)]
pub async fn update_employee(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeeChangeResponse>> {
    let use_case = state.use_cases.update_employee();

    let mut employee: Employee = RequestAdapter.restore(&payload)?;
    let department = use_case.get_department_by_id(&payload.department_id).await?;
    employee.change_department(Some(department));

    use_case.update_employee(&employee).await?;
    tracing::info!(employee_id = %employee.id(), by = %current_user.username, "Employee updated");

    Ok(Json(EmployeeChangeResponse {
        message: format!("Employee '{}' updated", employee.name()),
        employee,
    }))
}
