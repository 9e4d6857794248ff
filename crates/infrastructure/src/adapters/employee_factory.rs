use application::{Converter, Restorer};
use common::AppResult;
use domain::Employee;

use super::{DepartmentEntityAdapter, EmployeeEntityAdapter};
use crate::entities::{department, employee};

/// An employee row together with its department row, as loaded by a join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee: employee::Model,
    pub department: Option<department::Model>,
}

impl From<(employee::Model, Option<department::Model>)> for EmployeeRecord {
    fn from((employee, department): (employee::Model, Option<department::Model>)) -> Self {
        Self {
            employee,
            department,
        }
    }
}

/// Builds complete employees, department included, from joined rows and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeFactory {
    employees: EmployeeEntityAdapter,
    departments: DepartmentEntityAdapter,
}

impl EmployeeFactory {
    pub fn new(employees: EmployeeEntityAdapter, departments: DepartmentEntityAdapter) -> Self {
        Self {
            employees,
            departments,
        }
    }
}

impl Converter<Employee, EmployeeRecord> for EmployeeFactory {
    fn convert(&self, domain: &Employee) -> AppResult<EmployeeRecord> {
        Ok(EmployeeRecord {
            employee: self.employees.convert(domain)?,
            department: domain
                .department()
                .map(|department| self.departments.convert(department))
                .transpose()?,
        })
    }
}

impl Restorer<Employee, EmployeeRecord> for EmployeeFactory {
    fn restore(&self, target: &EmployeeRecord) -> AppResult<Employee> {
        let mut employee = self.employees.restore(&target.employee)?;
        if let Some(department) = &target.department {
            employee.change_department(Some(self.departments.restore(department)?));
        }
        Ok(employee)
    }
}
