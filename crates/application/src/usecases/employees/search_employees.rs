use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::Employee;

use crate::repositories::EmployeeRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Partial-match search on employee names.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SearchEmployeesByKeywordUseCase: Send + Sync {
    /// Matching employees in store order; `NotFound` when nothing matches.
    async fn execute(&self, keyword: &str) -> AppResult<Vec<Employee>>;
}

pub struct SearchEmployeesByKeywordInteractor {
    employees: Arc<dyn EmployeeRepository>,
}

impl SearchEmployeesByKeywordInteractor {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }
}

#[async_trait]
impl SearchEmployeesByKeywordUseCase for SearchEmployeesByKeywordInteractor {
    async fn execute(&self, keyword: &str) -> AppResult<Vec<Employee>> {
        let employees = self.employees.select_by_name_like(keyword).await?;
        if employees.is_empty() {
            return Err(AppError::not_found(format!(
                "No employees matched the keyword '{}'",
                keyword
            )));
        }

        tracing::debug!(keyword, count = employees.len(), "Employee search");
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockEmployeeRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_search_with_no_match_is_not_found() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_select_by_name_like()
            .with(eq("zzz"))
            .returning(|_| Ok(vec![]));

        let err = SearchEmployeesByKeywordInteractor::new(Arc::new(employees))
            .execute("zzz")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("zzz")));
    }

    #[tokio::test]
    async fn test_search_returns_repository_order() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_select_by_name_like().returning(|_| {
            Ok(vec![
                Employee::new("Anna").unwrap(),
                Employee::new("Hannah").unwrap(),
                Employee::new("Joanna").unwrap(),
            ])
        });

        let found = SearchEmployeesByKeywordInteractor::new(Arc::new(employees))
            .execute("nna")
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Anna", "Hannah", "Joanna"]);
    }
}
