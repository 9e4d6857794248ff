//! Field rules shared by the entities.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

pub(crate) fn identity(entity: &'static str, value: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::required("id"));
    }
    Uuid::parse_str(value).map_err(|_| DomainError::invalid_id(entity, value))?;
    Ok(value.to_string())
}

pub(crate) fn bounded(field: &'static str, value: &str, max: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::required(field));
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(DomainError::TooLong { field, max, actual });
    }
    Ok(value.to_string())
}

pub(crate) fn new_identity() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rejects_blank_and_malformed() {
        assert_eq!(identity("Department", " "), Err(DomainError::required("id")));
        assert!(matches!(
            identity("Department", "not-a-uuid"),
            Err(DomainError::InvalidId { entity: "Department", .. })
        ));
    }

    #[test]
    fn test_bounded_counts_characters_not_bytes() {
        // 20 multi-byte characters
        let name = "é".repeat(20);
        assert_eq!(bounded("name", &name, 20), Ok(name.clone()));
    }

    #[test]
    fn test_bounded_reports_current_length() {
        let err = bounded("name", &"a".repeat(25), 20).unwrap_err();
        assert!(err.to_string().contains("Current length: 25"));
    }
}
