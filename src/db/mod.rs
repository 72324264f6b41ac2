use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::models::page::{Page, PageQuery};

pub mod employee;
#[cfg(test)]
pub mod memory;

pub use employee::PgEmployeeRepository;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
}

/// Storage for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Insert a row and return its generated id. A taken username yields
    /// `AppError::Conflict`.
    async fn insert(&self, employee: &NewEmployee) -> Result<i64, AppError>;

    /// Apply a partial update and return the number of rows touched.
    async fn update(&self, changes: &EmployeeChanges) -> Result<u64, AppError>;

    /// Records whose name contains `query.name` (case-insensitive), newest
    /// update first.
    async fn page(&self, query: &PageQuery) -> Result<Page<Employee>, AppError>;
}

pub(crate) fn username_taken(username: &str) -> AppError {
    AppError::Conflict(format!("username {} already exists", username))
}

/// Build an ILIKE pattern that matches `needle` literally anywhere.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
