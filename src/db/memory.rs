//! In-process repository backing the handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{username_taken, EmployeeRepository};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::models::page::{Page, PageQuery};

#[derive(Default)]
pub struct MemoryEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
}

impl MemoryEmployeeRepository {
    pub fn with_employees(rows: Vec<Employee>) -> Self {
        MemoryEmployeeRepository { rows: Mutex::new(rows) }
    }

    pub fn snapshot(&self) -> Vec<Employee> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|e| e.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| e.username == employee.username) {
            return Err(username_taken(&employee.username));
        }
        let id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        rows.push(Employee {
            id,
            username: employee.username.clone(),
            name: employee.name.clone(),
            password: employee.password.clone(),
            phone: employee.phone.clone(),
            sex: employee.sex.clone(),
            id_number: employee.id_number.clone(),
            status: employee.status,
            create_time: employee.stamp.at,
            update_time: employee.stamp.at,
            create_user: Some(employee.stamp.by),
            update_user: Some(employee.stamp.by),
        });
        Ok(id)
    }

    async fn update(&self, changes: &EmployeeChanges) -> Result<u64, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(username) = &changes.username {
            if rows.iter().any(|e| &e.username == username && e.id != changes.id) {
                return Err(username_taken(username));
            }
        }
        let Some(row) = rows.iter_mut().find(|e| e.id == changes.id) else {
            return Ok(0);
        };
        if let Some(username) = &changes.username {
            row.username = username.clone();
        }
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(phone) = &changes.phone {
            row.phone = Some(phone.clone());
        }
        if let Some(sex) = &changes.sex {
            row.sex = Some(sex.clone());
        }
        if let Some(id_number) = &changes.id_number {
            row.id_number = Some(id_number.clone());
        }
        if let Some(status) = changes.status {
            row.status = status;
        }
        row.update_time = changes.stamp.at;
        row.update_user = Some(changes.stamp.by);
        Ok(1)
    }

    async fn page(&self, query: &PageQuery) -> Result<Page<Employee>, AppError> {
        let rows = self.rows.lock().unwrap();
        let needle = query.name.as_ref().map(|name| name.to_lowercase());
        let mut matching: Vec<Employee> = rows
            .iter()
            .filter(|e| match &needle {
                Some(needle) => e.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.update_time.cmp(&a.update_time).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        let records = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size as usize)
            .collect();
        Ok(Page::new(query, records, total))
    }
}
