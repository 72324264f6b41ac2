use actix_web::{web, HttpResponse};

use crate::db::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::LoginRequest;
use crate::models::response::ApiResponse;
use crate::utils::password;
use crate::utils::session::SessionContext;
use crate::utils::validation::validate_payload;

pub const LOGOUT_SUCCEEDED: &str = "logout succeeded";

pub async fn login(
    session: SessionContext,
    repository: web::Data<dyn EmployeeRepository>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&req.0)?;

    let employee = repository
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| {
            log::warn!("Login rejected: unknown username {}", req.username);
            AppError::InvalidCredentials
        })?;

    if !password::matches(&req.password, &employee.password) {
        log::warn!("Login rejected: wrong password for {}", req.username);
        return Err(AppError::InvalidCredentials);
    }

    if !employee.is_enabled() {
        log::warn!("Login rejected: account {} is disabled", req.username);
        return Err(AppError::AccountDisabled);
    }

    session.persist_employee(employee.id)?;
    log::info!("Employee {} logged in", employee.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Some(id) = session.employee_id() {
        log::info!("Employee {} logged out", id);
    }
    session.clear();
    HttpResponse::Ok().json(ApiResponse::success(LOGOUT_SUCCEEDED))
}
