use actix_web::{web, HttpResponse};

use crate::db::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::{
    AuditStamp, CreateEmployeeRequest, EmployeeChanges, NewEmployee, UpdateEmployeeRequest,
};
use crate::models::page::{PageParams, PageQuery};
use crate::models::response::ApiResponse;
use crate::utils::session::CurrentEmployee;
use crate::utils::validation::validate_payload;

pub const EMPLOYEE_CREATED: &str = "employee created";
pub const EMPLOYEE_UPDATED: &str = "employee updated";
pub const EMPLOYEE_NOT_FOUND: &str = "employee not found";

pub async fn create_employee(
    current: CurrentEmployee,
    repository: web::Data<dyn EmployeeRepository>,
    new_employee: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&new_employee.0)?;

    let row = NewEmployee::from_request(new_employee.into_inner(), AuditStamp::now(current));
    let id = repository.insert(&row).await?;
    log::info!("Employee {} created {} ({})", current.id(), row.username, id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(EMPLOYEE_CREATED)))
}

pub async fn get_employee_page(
    _current: CurrentEmployee,
    repository: web::Data<dyn EmployeeRepository>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let query = PageQuery::from(query.into_inner());
    log::debug!(
        "Employee page {} (size {}), name filter {:?}",
        query.page,
        query.page_size,
        query.name
    );

    let page = repository.page(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(page)))
}

/// Partial update by id. The audit stamp is written on every call, and an
/// unknown id is not an error.
pub async fn update_employee(
    current: CurrentEmployee,
    repository: web::Data<dyn EmployeeRepository>,
    updates: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&updates.0)?;

    let changes = EmployeeChanges::from_request(updates.into_inner(), AuditStamp::now(current));
    let affected = repository.update(&changes).await?;
    if affected == 0 {
        log::debug!("Update matched no employee with id {}", changes.id);
    } else {
        log::info!("Employee {} updated employee {}", current.id(), changes.id);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(EMPLOYEE_UPDATED)))
}

pub async fn get_employee(
    _current: CurrentEmployee,
    repository: web::Data<dyn EmployeeRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = repository
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}
