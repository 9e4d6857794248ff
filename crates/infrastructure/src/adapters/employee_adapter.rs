use application::{Converter, Restorer};
use common::{AppError, AppResult};
use domain::Employee;

use super::UNSAVED_ID;
use crate::entities::employee;

/// Scalar employee columns only. The department row is handled by
/// [`EmployeeFactory`](super::EmployeeFactory).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeEntityAdapter;

impl Converter<Employee, employee::Model> for EmployeeEntityAdapter {
    fn convert(&self, domain: &Employee) -> AppResult<employee::Model> {
        Ok(employee::Model {
            id: UNSAVED_ID,
            public_id: domain.id().to_string(),
            name: domain.name().to_string(),
            department_id: domain.department().map(|d| d.id().to_string()),
        })
    }
}

impl Restorer<Employee, employee::Model> for EmployeeEntityAdapter {
    fn restore(&self, target: &employee::Model) -> AppResult<Employee> {
        Employee::with_id(&target.public_id, &target.name).map_err(|e| {
            AppError::internal_with(
                format!("Stored employee is invalid. emp_id={}", target.id),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Department;

    #[test]
    fn test_convert_keeps_department_reference() {
        let department = Department::new("Support").unwrap();
        let mut employee = Employee::new("Frank").unwrap();
        employee.change_department(Some(department.clone()));

        let model = EmployeeEntityAdapter.convert(&employee).unwrap();
        assert_eq!(model.public_id, employee.id());
        assert_eq!(model.department_id.as_deref(), Some(department.id()));
    }

    #[test]
    fn test_restore_scalar_columns() {
        let model = employee::Model {
            id: 9,
            public_id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            name: "Grace".to_string(),
            department_id: None,
        };
        let employee = EmployeeEntityAdapter.restore(&model).unwrap();
        assert_eq!(employee.id(), model.public_id);
        assert_eq!(employee.name(), "Grace");
    }

    #[test]
    fn test_over_long_stored_name_is_internal_error() {
        let model = employee::Model {
            id: 10,
            public_id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            name: "n".repeat(40),
            department_id: None,
        };
        assert!(matches!(
            EmployeeEntityAdapter.restore(&model),
            Err(AppError::Internal { .. })
        ));
    }
}
