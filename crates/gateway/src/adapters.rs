//! Request bodies to domain objects.
//!
//! Request data that breaks a domain rule is the caller's fault, so failures
//! surface as [`common::AppError::Domain`] (400) instead of internal errors.
//! Departments are not restored here; handlers look them up by id.

use application::Restorer;
use common::AppResult;
use domain::{Employee, LoginUser, User};

use crate::handlers::auth_handler::LoginRequest;
use crate::handlers::employee_payloads::{RegisterEmployeeRequest, UpdateEmployeeRequest};
use crate::handlers::user_handler::RegisterUserRequest;

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestAdapter;

impl Restorer<Employee, RegisterEmployeeRequest> for RequestAdapter {
    fn restore(&self, target: &RegisterEmployeeRequest) -> AppResult<Employee> {
        Ok(Employee::new(&target.name)?)
    }
}

impl Restorer<Employee, UpdateEmployeeRequest> for RequestAdapter {
    fn restore(&self, target: &UpdateEmployeeRequest) -> AppResult<Employee> {
        Ok(Employee::with_id(&target.id, &target.name)?)
    }
}

impl Restorer<User, RegisterUserRequest> for RequestAdapter {
    fn restore(&self, target: &RegisterUserRequest) -> AppResult<User> {
        Ok(User::new(&target.username, &target.email, &target.password)?)
    }
}

impl Restorer<LoginUser, LoginRequest> for RequestAdapter {
    fn restore(&self, target: &LoginRequest) -> AppResult<LoginUser> {
        Ok(LoginUser::new(
            target.username_or_email.trim(),
            target.password.as_str(),
        ))
    }
}
