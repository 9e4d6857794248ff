//! Migration: Seed the initial departments.
//!
//! Departments have no registration flow of their own, so the starting set
//! is provided here.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use super::m20240101_000001_create_department_table::Department;

const DEPARTMENTS: &[(&str, &str)] = &[
    ("b2f7c3a4-1d5e-4c8f-9a0b-1c2d3e4f5a61", "Sales"),
    ("c3a8d4b5-2e6f-4d9a-8b1c-2d3e4f5a6b72", "Engineering"),
    ("d4b9e5c6-3f7a-4e0b-9c2d-3e4f5a6b7c83", "Human Resources"),
    ("e5c0f6d7-4a8b-4f1c-8d3e-4f5a6b7c8d94", "Finance"),
];

/// Rows already present are left alone.
fn seed_statement() -> Result<InsertStatement, DbErr> {
    let mut insert = Query::insert();
    insert
        .into_table(Department::Table)
        .columns([Department::DeptUuid, Department::DeptName]);

    for (uuid, name) in DEPARTMENTS {
        insert
            .values([(*uuid).into(), (*name).into()])
            .map_err(|e| DbErr::Custom(format!("Invalid department seed row: {}", e)))?;
    }

    insert.on_conflict(
        OnConflict::column(Department::DeptUuid)
            .do_nothing()
            .to_owned(),
    );
    Ok(insert.to_owned())
}

fn unseed_statement() -> DeleteStatement {
    Query::delete()
        .from_table(Department::Table)
        .and_where(Expr::col(Department::DeptUuid).is_in(DEPARTMENTS.iter().map(|(uuid, _)| *uuid)))
        .to_owned()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let statement = db.get_database_backend().build(&seed_statement()?);
        db.execute(statement).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let statement = db.get_database_backend().build(&unseed_statement());
        db.execute(statement).await?;
        Ok(())
    }
}
