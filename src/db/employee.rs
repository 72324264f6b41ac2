use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{contains_pattern, username_taken, EmployeeRepository};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::models::page::{Page, PageQuery};

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

fn map_write_error(err: sqlx::Error, username: Option<&str>) -> AppError {
    match (&err, username) {
        (sqlx::Error::Database(db), Some(username)) if db.is_unique_violation() => {
            username_taken(username)
        }
        _ => {
            log::error!("Database error during employee write: {:?}", err);
            AppError::from(err)
        }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, username, name, password, phone, sex, id_number, status,
                   create_time, update_time, create_user, update_user
            FROM employee
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, username, name, password, phone, sex, id_number, status,
                   create_time, update_time, create_user, update_user
            FROM employee
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employee
                (username, name, password, phone, sex, id_number, status,
                 create_time, update_time, create_user, update_user)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8, $9, $9)
            RETURNING id
            "#,
        )
        .bind(&employee.username)
        .bind(&employee.name)
        .bind(&employee.password)
        .bind(&employee.phone)
        .bind(&employee.sex)
        .bind(&employee.id_number)
        .bind(employee.status)
        .bind(employee.stamp.at)
        .bind(employee.stamp.by)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_write_error(err, Some(&employee.username)))
    }

    async fn update(&self, changes: &EmployeeChanges) -> Result<u64, AppError> {
        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new("UPDATE employee SET ");
        let mut separated = query.separated(", ");

        if let Some(username) = &changes.username {
            separated.push("username = ").push_bind_unseparated(username.clone());
        }
        if let Some(name) = &changes.name {
            separated.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(phone) = &changes.phone {
            separated.push("phone = ").push_bind_unseparated(phone.clone());
        }
        if let Some(sex) = &changes.sex {
            separated.push("sex = ").push_bind_unseparated(sex.clone());
        }
        if let Some(id_number) = &changes.id_number {
            separated.push("id_number = ").push_bind_unseparated(id_number.clone());
        }
        if let Some(status) = changes.status {
            separated.push("status = ").push_bind_unseparated(status);
        }
        separated.push("update_time = ").push_bind_unseparated(changes.stamp.at);
        separated.push("update_user = ").push_bind_unseparated(changes.stamp.by);

        query.push(" WHERE id = ").push_bind(changes.id);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|err| map_write_error(err, changes.username.as_deref()))?;
        Ok(result.rows_affected())
    }

    async fn page(&self, query: &PageQuery) -> Result<Page<Employee>, AppError> {
        let pattern = query.name.as_deref().map(contains_pattern);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employee WHERE ($1::text IS NULL OR name ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let records = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, username, name, password, phone, sex, id_number, status,
                   create_time, update_time, create_user, update_user
            FROM employee
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY update_time DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(query.page_size)
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(query, records, total))
    }
}
