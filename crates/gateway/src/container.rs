//! Use case container.
//!
//! Handlers ask the container for an interactor on every request. The
//! production container builds each one over a fresh persistence scope, so
//! the unit of work and the repositories of one request share a session and
//! never see another request's transaction.

use std::sync::Arc;

use application::{
    DeleteEmployeeInteractor, DeleteEmployeeUseCase, LoginUserInteractor, LoginUserUseCase,
    PasswordHasher, RegisterEmployeeInteractor, RegisterEmployeeUseCase, RegisterUserInteractor,
    RegisterUserUseCase, SearchEmployeesByKeywordInteractor, SearchEmployeesByKeywordUseCase,
    TokenProvider, UpdateEmployeeInteractor, UpdateEmployeeUseCase,
};
use infrastructure::Persistence;

/// Access to the use cases, one instance per call.
pub trait UseCases: Send + Sync {
    fn register_employee(&self) -> Arc<dyn RegisterEmployeeUseCase>;

    fn update_employee(&self) -> Arc<dyn UpdateEmployeeUseCase>;

    fn delete_employee(&self) -> Arc<dyn DeleteEmployeeUseCase>;

    fn search_employees(&self) -> Arc<dyn SearchEmployeesByKeywordUseCase>;

    fn register_user(&self) -> Arc<dyn RegisterUserUseCase>;

    fn login_user(&self) -> Arc<dyn LoginUserUseCase>;
}

/// Interactors wired to SeaORM persistence.
#[derive(Clone)]
pub struct Interactors {
    persistence: Persistence,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl Interactors {
    pub fn new(
        persistence: Persistence,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            persistence,
            hasher,
            tokens,
        }
    }
}

impl UseCases for Interactors {
    fn register_employee(&self) -> Arc<dyn RegisterEmployeeUseCase> {
        let scope = self.persistence.scope();
        Arc::new(RegisterEmployeeInteractor::new(
            scope.departments,
            scope.employees,
            scope.unit_of_work,
        ))
    }

    fn update_employee(&self) -> Arc<dyn UpdateEmployeeUseCase> {
        let scope = self.persistence.scope();
        Arc::new(UpdateEmployeeInteractor::new(
            scope.departments,
            scope.employees,
            scope.unit_of_work,
        ))
    }

    fn delete_employee(&self) -> Arc<dyn DeleteEmployeeUseCase> {
        let scope = self.persistence.scope();
        Arc::new(DeleteEmployeeInteractor::new(
            scope.employees,
            scope.unit_of_work,
        ))
    }

    fn search_employees(&self) -> Arc<dyn SearchEmployeesByKeywordUseCase> {
        let scope = self.persistence.scope();
        Arc::new(SearchEmployeesByKeywordInteractor::new(scope.employees))
    }

    fn register_user(&self) -> Arc<dyn RegisterUserUseCase> {
        let scope = self.persistence.scope();
        Arc::new(RegisterUserInteractor::new(
            scope.users,
            scope.unit_of_work,
            self.hasher.clone(),
        ))
    }

    fn login_user(&self) -> Arc<dyn LoginUserUseCase> {
        let scope = self.persistence.scope();
        Arc::new(LoginUserInteractor::new(
            scope.users,
            self.hasher.clone(),
            self.tokens.clone(),
        ))
    }
}
