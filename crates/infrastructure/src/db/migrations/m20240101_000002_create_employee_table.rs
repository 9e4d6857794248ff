//! Migration: Create employee table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::EmpId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employee::EmpUuid)
                            .char_len(36)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employee::EmpName).string_len(20).not_null())
                    .col(ColumnDef::new(Employee::DeptUuid).char_len(36).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_department")
                            .from(Employee::Table, Employee::DeptUuid)
                            .to(Department::Table, Department::DeptUuid)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Keyword search filters on the name
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_emp_name")
                    .table(Employee::Table)
                    .col(Employee::EmpName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employee {
    Table,
    EmpId,
    EmpUuid,
    EmpName,
    DeptUuid,
}
