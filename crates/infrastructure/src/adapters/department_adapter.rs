use application::{Converter, Restorer};
use common::{AppError, AppResult};
use domain::Department;

use super::UNSAVED_ID;
use crate::entities::department;

#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentEntityAdapter;

impl Converter<Department, department::Model> for DepartmentEntityAdapter {
    fn convert(&self, domain: &Department) -> AppResult<department::Model> {
        Ok(department::Model {
            id: UNSAVED_ID,
            public_id: domain.id().to_string(),
            name: domain.name().to_string(),
        })
    }
}

impl Restorer<Department, department::Model> for DepartmentEntityAdapter {
    fn restore(&self, target: &department::Model) -> AppResult<Department> {
        Department::with_id(&target.public_id, &target.name).map_err(|e| {
            AppError::internal_with(
                format!("Stored department is invalid. dept_id={}", target.id),
                e,
            )
        })
    }
}
