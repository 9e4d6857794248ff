//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use domain::{Department, Employee};

use crate::handlers::auth_handler::{LoginRequest, TokenResponse};
use crate::handlers::delete_employee_handler::DeletedResponse;
use crate::handlers::employee_payloads::{
    DepartmentVerification, EmployeeChangeResponse, RegisterEmployeeRequest,
    UpdateEmployeeRequest,
};
use crate::handlers::health_handler::{HealthResponse, PingResponse, ServiceHealth};
use crate::handlers::user_handler::{RegisterUserRequest, RegisteredUserResponse, UserView};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::health_handler::ping,
        crate::handlers::auth_handler::login,
        crate::handlers::user_handler::register,
        crate::handlers::register_employee_handler::list_departments,
        crate::handlers::register_employee_handler::verify_department,
        crate::handlers::register_employee_handler::register_employee,
        crate::handlers::update_employee_handler::list_departments,
        crate::handlers::update_employee_handler::verify_department,
        crate::handlers::update_employee_handler::get_employee,
        crate::handlers::update_employee_handler::update_employee,
        crate::handlers::delete_employee_handler::get_employee,
        crate::handlers::delete_employee_handler::delete_employee,
        crate::handlers::search_employee_handler::search_employees,
    ),
    components(
        schemas(
            Department,
            Employee,
            LoginRequest,
            TokenResponse,
            RegisterUserRequest,
            RegisteredUserResponse,
            UserView,
            RegisterEmployeeRequest,
            UpdateEmployeeRequest,
            EmployeeChangeResponse,
            DepartmentVerification,
            DeletedResponse,
            HealthResponse,
            ServiceHealth,
            PingResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Employees", description = "Employee registration, update, deletion and search"),
        (name = "Users", description = "User account endpoints"),
        (name = "Authentication", description = "Login and token issuing"),
        (name = "Health", description = "Liveness and database connectivity"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
