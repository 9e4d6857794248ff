//! Employee domain entity.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::constants::MAX_EMPLOYEE_NAME_LENGTH;
use crate::department::Department;
use crate::error::{DomainError, DomainResult};
use crate::rules;

/// Person employed by the organisation, optionally assigned to a department.
///
/// The department is held by value; replacing it never touches the
/// department aggregate itself.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Employee {
    id: String,
    name: String,
    department: Option<Department>,
}

impl Employee {
    /// Create an employee with a freshly generated id.
    pub fn new(name: &str) -> DomainResult<Self> {
        Self::with_id(&rules::new_identity(), name)
    }

    /// Create an employee with an explicit id.
    pub fn with_id(id: &str, name: &str) -> DomainResult<Self> {
        Ok(Self {
            id: rules::identity("Employee", id)?,
            name: rules::bounded("employee name", name, MAX_EMPLOYEE_NAME_LENGTH)?,
            department: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    /// Department the employee must belong to for registration and updates.
    pub fn require_department(&self) -> DomainResult<&Department> {
        self.department
            .as_ref()
            .ok_or_else(|| DomainError::MissingDepartment(self.id.clone()))
    }

    pub fn change_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = rules::bounded("employee name", name, MAX_EMPLOYEE_NAME_LENGTH)?;
        Ok(())
    }

    /// Assign or clear the department affiliation.
    pub fn change_department(&mut self, department: Option<Department>) {
        self.department = department;
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.department {
            Some(department) => write!(
                f,
                "Employee id: {}, name: {}, department: {}",
                self.id,
                self.name,
                department.name()
            ),
            None => write!(f, "Employee id: {}, name: {}, department: none", self.id, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    #[test]
    fn test_with_id_keeps_inputs() {
        let employee = Employee::with_id(ID, "Alice").unwrap();
        assert_eq!(employee.id(), ID);
        assert_eq!(employee.name(), "Alice");
        assert!(employee.department().is_none());
    }

    #[test]
    fn test_name_rules() {
        assert!(matches!(
            Employee::new(""),
            Err(DomainError::Required { field: "employee name" })
        ));
        assert!(Employee::new(&"a".repeat(20)).is_ok());

        let err = Employee::new(&"a".repeat(21)).unwrap_err();
        assert!(err.to_string().contains("Current length: 21"));
    }

    #[test]
    fn test_change_name_validates() {
        let mut employee = Employee::new("Bob").unwrap();
        assert!(employee.change_name(&"b".repeat(30)).is_err());
        assert_eq!(employee.name(), "Bob");

        employee.change_name("Robert").unwrap();
        assert_eq!(employee.name(), "Robert");
    }

    #[test]
    fn test_change_department_assigns_and_clears() {
        let mut employee = Employee::new("Carol").unwrap();
        let department = Department::new("Finance").unwrap();

        employee.change_department(Some(department.clone()));
        assert_eq!(employee.department(), Some(&department));
        assert_eq!(employee.require_department().unwrap(), &department);

        employee.change_department(None);
        assert!(employee.department().is_none());
        assert!(matches!(
            employee.require_department(),
            Err(DomainError::MissingDepartment(_))
        ));
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Employee::with_id(ID, "Dave").unwrap();
        let mut b = Employee::with_id(ID, "David").unwrap();
        b.change_department(Some(Department::new("Ops").unwrap()));
        assert_eq!(a, b);
        assert_ne!(a, Employee::new("Dave").unwrap());
    }

    #[test]
    fn test_display_includes_department_name() {
        let mut employee = Employee::with_id(ID, "Eve").unwrap();
        employee.change_department(Some(Department::new("Legal").unwrap()));
        assert_eq!(
            employee.to_string(),
            format!("Employee id: {ID}, name: Eve, department: Legal")
        );
    }
}
