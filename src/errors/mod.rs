use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::response::ApiResponse;

pub const LOGIN_FAILED: &str = "login failed";
pub const ACCOUNT_DISABLED: &str = "account disabled";
pub const NOT_LOGGED_IN: &str = "NOTLOGIN";

#[derive(Debug)]
pub enum AppError {
    InvalidCredentials,
    AccountDisabled,
    NotFound(String),
    NotLoggedIn,
    Conflict(String),
    BadRequest(String),
    DatabaseError(String),
    InternalServerError(String),
}

impl AppError {
    /// Message shown to the client. Infrastructure details stay in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidCredentials => LOGIN_FAILED,
            AppError::AccountDisabled => ACCOUNT_DISABLED,
            AppError::NotLoggedIn => NOT_LOGGED_IN,
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::BadRequest(msg) => msg.as_str(),
            AppError::DatabaseError(_) => "database error",
            AppError::InternalServerError(_) => "internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidCredentials => write!(f, "Invalid Credentials"),
            AppError::AccountDisabled => write!(f, "Account Disabled"),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::NotLoggedIn => write!(f, "Not Logged In"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::error(self.public_message()))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(db.message().to_string())
            }
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}
