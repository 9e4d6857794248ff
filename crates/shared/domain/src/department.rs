//! Department domain entity.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::constants::MAX_DEPARTMENT_NAME_LENGTH;
use crate::error::DomainResult;
use crate::rules;

/// Organisational unit an employee may belong to.
///
/// Identity is the UUID string; two departments with the same id are equal
/// regardless of their names.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Department {
    id: String,
    name: String,
}

impl Department {
    /// Create a department with a freshly generated id.
    pub fn new(name: &str) -> DomainResult<Self> {
        Self::with_id(&rules::new_identity(), name)
    }

    /// Create a department with an explicit id.
    pub fn with_id(id: &str, name: &str) -> DomainResult<Self> {
        Ok(Self {
            id: rules::identity("Department", id)?,
            name: rules::bounded("department name", name, MAX_DEPARTMENT_NAME_LENGTH)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the department. The current name is kept when validation fails.
    pub fn change_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = rules::bounded("department name", name, MAX_DEPARTMENT_NAME_LENGTH)?;
        Ok(())
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Department {}

impl Hash for Department {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Department id: {}, name: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    const ID: &str = "5b0a6a8e-3c1e-4a59-9d0e-6b7f1c2d3e4f";

    #[test]
    fn test_with_id_keeps_inputs() {
        let department = Department::with_id(ID, "Engineering").unwrap();
        assert_eq!(department.id(), ID);
        assert_eq!(department.name(), "Engineering");
    }

    #[test]
    fn test_new_generates_uuid() {
        let department = Department::new("Sales").unwrap();
        assert!(uuid::Uuid::parse_str(department.id()).is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Department::with_id(ID, "   ").unwrap_err();
        assert_eq!(err, DomainError::required("department name"));
    }

    #[test]
    fn test_long_name_reports_length() {
        let err = Department::with_id(ID, &"x".repeat(21)).unwrap_err();
        assert!(matches!(err, DomainError::TooLong { max: 20, actual: 21, .. }));
        assert!(err.to_string().contains("21"));
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let err = Department::with_id("12345", "Sales").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { .. }));
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Department::with_id(ID, "Sales").unwrap();
        let b = Department::with_id(ID, "Marketing").unwrap();
        let c = Department::new("Sales").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_failed_rename_keeps_name() {
        let mut department = Department::with_id(ID, "Sales").unwrap();
        assert!(department.change_name("").is_err());
        assert_eq!(department.name(), "Sales");
    }
}
