use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use application::{Converter, EmployeeRepository, Restorer};
use common::{AppError, AppResult};
use domain::Employee;

use crate::adapters::{EmployeeFactory, EmployeeRecord};
use crate::entities::department::Entity as DepartmentEntity;
use crate::entities::employee::{self, Entity as EmployeeEntity};
use crate::session::{on_session, DbSession};

const LIKE_ESCAPE: char = '\\';

/// `%keyword%` with the keyword's own wildcards matched literally.
fn contains_pattern(keyword: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    session: Arc<DbSession>,
    factory: EmployeeFactory,
}

impl EmployeeStore {
    pub fn new(session: Arc<DbSession>, factory: EmployeeFactory) -> Self {
        Self { session, factory }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn create(&self, employee: &Employee) -> AppResult<()> {
        let record = self.factory.convert(employee)?;
        let insert = EmployeeEntity::insert(record.employee.into_new_active_model());

        on_session!(self.session, |conn| insert.exec_without_returning(conn).await)
            .map_err(|e| {
                AppError::internal_with(format!("Failed to register employee. {}", employee), e)
            })?;

        Ok(())
    }

    async fn update_by_id(&self, employee: &Employee) -> AppResult<bool> {
        let record = self.factory.convert(employee)?;
        let update = EmployeeEntity::update_many()
            .col_expr(employee::Column::Name, Expr::value(record.employee.name))
            .col_expr(
                employee::Column::DepartmentId,
                Expr::value(record.employee.department_id),
            )
            .filter(employee::Column::PublicId.eq(employee.id()));

        let result = on_session!(self.session, |conn| update.exec(conn).await).map_err(|e| {
            AppError::internal_with(format!("Failed to update employee. {}", employee), e)
        })?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let delete = EmployeeEntity::delete_many().filter(employee::Column::PublicId.eq(id));

        let result = on_session!(self.session, |conn| delete.exec(conn).await).map_err(|e| {
            AppError::internal_with(format!("Failed to delete employee. id={}", id), e)
        })?;

        Ok(result.rows_affected > 0)
    }

    async fn select_by_name_like(&self, keyword: &str) -> AppResult<Vec<Employee>> {
        let query = EmployeeEntity::find()
            .filter(
                Expr::col((EmployeeEntity, employee::Column::Name)).like(contains_pattern(keyword)),
            )
            .find_also_related(DepartmentEntity)
            .order_by_asc(employee::Column::Id);

        let rows = on_session!(self.session, |conn| query.all(conn).await).map_err(|e| {
            AppError::internal_with(format!("Failed to search employees. keyword={}", keyword), e)
        })?;

        let records: Vec<EmployeeRecord> = rows.into_iter().map(EmployeeRecord::from).collect();
        self.factory.restore_all(&records)
    }

    async fn select_by_id(&self, id: &str) -> AppResult<Option<Employee>> {
        let query = EmployeeEntity::find()
            .filter(employee::Column::PublicId.eq(id))
            .find_also_related(DepartmentEntity);

        let row = on_session!(self.session, |conn| query.one(conn).await).map_err(|e| {
            AppError::internal_with(format!("Failed to fetch employee. id={}", id), e)
        })?;

        row.map(|row| self.factory.restore(&EmployeeRecord::from(row)))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::department;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, Value};
    use std::error::Error as _;

    const EMPLOYEE_ID: &str = "9b2e1c7a-6d34-4b8f-8a51-2f0d6c9e7b10";
    const DEPARTMENT_ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";

    fn store(db: MockDatabase) -> EmployeeStore {
        EmployeeStore::new(
            Arc::new(DbSession::new(db.into_connection())),
            EmployeeFactory::default(),
        )
    }

    fn exec_result(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn employee_row() -> employee::Model {
        employee::Model {
            id: 1,
            public_id: EMPLOYEE_ID.to_string(),
            name: "Alice".to_string(),
            department_id: Some(DEPARTMENT_ID.to_string()),
        }
    }

    fn department_row() -> department::Model {
        department::Model {
            id: 4,
            public_id: DEPARTMENT_ID.to_string(),
            name: "Engineering".to_string(),
        }
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1), exec_result(0)]);
        let store = store(db);

        assert!(store.delete_by_id(EMPLOYEE_ID).await.unwrap());
        assert!(!store.delete_by_id(EMPLOYEE_ID).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_reports_missing_row() {
        let db =
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec_result(0)]);
        let employee = Employee::with_id(EMPLOYEE_ID, "Alice").unwrap();

        assert!(!store(db).update_by_id(&employee).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_inserts_row() {
        let db =
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec_result(1)]);
        let employee = Employee::new("Bob").unwrap();

        assert!(store(db).create(&employee).await.is_ok());
    }

    #[tokio::test]
    async fn test_select_by_id_loads_department() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(employee_row(), department_row())]]);

        let employee = store(db).select_by_id(EMPLOYEE_ID).await.unwrap().unwrap();

        assert_eq!(employee.id(), EMPLOYEE_ID);
        assert_eq!(employee.department().map(|d| d.name()), Some("Engineering"));
    }

    #[tokio::test]
    async fn test_search_keeps_row_order_and_missing_departments() {
        let mut second = employee_row();
        second.id = 2;
        second.public_id = "0f8fad5b-d9cb-469f-a165-70867728950e".to_string();
        second.name = "Malice".to_string();
        second.department_id = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            (employee_row(), Some(department_row())),
            (second, None),
        ]]);

        let found = store(db).select_by_name_like("lice").await.unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name(), "Alice");
        assert!(found[0].department().is_some());
        assert_eq!(found[1].name(), "Malice");
        assert!(found[1].department().is_none());
    }

    #[tokio::test]
    async fn test_search_matches_wildcards_literally() {
        let connection = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<(employee::Model, Option<department::Model>)>::new()])
                .into_connection(),
        );
        let store = EmployeeStore::new(
            Arc::new(DbSession::new(Arc::clone(&connection))),
            EmployeeFactory::default(),
        );

        assert!(store.select_by_name_like("5%_a\\").await.unwrap().is_empty());
        drop(store);

        let connection: DatabaseConnection =
            Arc::into_inner(connection).expect("store released the connection");
        let log = connection.into_transaction_log();
        let statement = &log[0].statements()[0];

        assert!(statement.sql.contains("ESCAPE"));
        let values = statement.values.as_ref().unwrap();
        assert_eq!(
            values.0,
            vec![Value::String(Some(Box::new("%5\\%\\_a\\\\%".to_string())))]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_names_the_key_and_keeps_the_cause() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())]);

        let err = store(db).delete_by_id(EMPLOYEE_ID).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains(EMPLOYEE_ID));
        assert!(err.source().unwrap().to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_search_failure_names_the_keyword_and_keeps_the_cause() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("timeout".to_string())]);

        let err = store(db).select_by_name_like("Ali").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("keyword=Ali"));
        assert!(err.source().is_some());
    }
}
