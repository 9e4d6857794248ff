//! Request-scoped wiring of the unit of work and the repositories.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use application::{DepartmentRepository, EmployeeRepository, UnitOfWork, UserRepository};

use crate::adapters::{
    DepartmentEntityAdapter, EmployeeEntityAdapter, EmployeeFactory, UserEntityAdapter,
};
use crate::repositories::{DepartmentStore, EmployeeStore, UserStore};
use crate::session::DbSession;
use crate::unit_of_work::SeaOrmUnitOfWork;

/// Factory for request scopes. Cheap to clone; holds only the pool handle.
#[derive(Clone)]
pub struct Persistence {
    connection: Arc<DatabaseConnection>,
}

/// Unit of work and repositories sharing one session.
pub struct PersistenceScope {
    pub unit_of_work: Arc<dyn UnitOfWork>,
    pub departments: Arc<dyn DepartmentRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Persistence {
    pub fn new(connection: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self {
            connection: connection.into(),
        }
    }

    /// Fresh session, unit of work and repositories for one request.
    pub fn scope(&self) -> PersistenceScope {
        let session = Arc::new(DbSession::new(Arc::clone(&self.connection)));
        let departments = DepartmentEntityAdapter;

        PersistenceScope {
            unit_of_work: Arc::new(SeaOrmUnitOfWork::new(session.clone())),
            departments: Arc::new(DepartmentStore::new(session.clone(), departments)),
            employees: Arc::new(EmployeeStore::new(
                session.clone(),
                EmployeeFactory::new(EmployeeEntityAdapter, departments),
            )),
            users: Arc::new(UserStore::new(session, UserEntityAdapter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::department;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_scope_shares_transaction_between_repositories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([Vec::<department::Model>::new()])
            .into_connection();
        let scope = Persistence::new(db).scope();

        scope.unit_of_work.begin().await.unwrap();
        assert!(scope.employees.delete_by_id("any").await.unwrap());
        assert!(scope.departments.select_all().await.unwrap().is_empty());
        scope.unit_of_work.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_each_scope_has_its_own_session() {
        let persistence =
            Persistence::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let first = persistence.scope();
        let second = persistence.scope();
        first.unit_of_work.begin().await.unwrap();

        // the second scope has no transaction, so its commit is a no-op
        second.unit_of_work.commit().await.unwrap();
        first.unit_of_work.rollback().await.unwrap();
    }
}
