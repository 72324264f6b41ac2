use actix_web::{error, web};

use crate::errors::AppError;

pub mod auth;
pub mod employee;

/// Register the `/employee` routes and the extractor configs that turn
/// malformed input into the error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    .service(
        web::scope("/employee")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/page", web::get().to(employee::get_employee_page))
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::put().to(employee::update_employee)),
            )
            .route("/{id}", web::get().to(employee::get_employee)),
    );
}
