//! Request and response bodies of the employee endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppError, AppResult};
use domain::{Department, Employee};

/// New employee with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterEmployeeRequest {
    #[validate(length(min = 1, max = 20, message = "Name must be 1 to 20 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(length(equal = 36, message = "Department id must be a UUID"))]
    #[schema(example = "8f9a1d3e-6a55-4a0f-9d1e-2b7f0c9e1a01")]
    pub department_id: String,
}

/// Changed employee with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployeeRequest {
    #[validate(length(equal = 36, message = "Employee id must be a UUID"))]
    pub id: String,
    #[validate(length(min = 1, max = 20, message = "Name must be 1 to 20 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(length(equal = 36, message = "Department id must be a UUID"))]
    pub department_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DepartmentQuery {
    /// Department id to check
    pub department_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Part of the employee name
    #[serde(default)]
    pub keyword: String,
}

/// Outcome of a write, with the employee as stored
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeChangeResponse {
    pub message: String,
    pub employee: Employee,
}

/// Answer of a department check: `true`, or why the department is unusable.
/// An unknown department is a normal answer, not an error status.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DepartmentVerification {
    Exists(bool),
    Missing(String),
}

impl DepartmentVerification {
    pub fn from_lookup(lookup: AppResult<Department>) -> AppResult<Self> {
        match lookup {
            Ok(_) => Ok(Self::Exists(true)),
            Err(AppError::NotFound(message)) => Ok(Self::Missing(message)),
            Err(e) => Err(e),
        }
    }
}
