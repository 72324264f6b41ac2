use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;
use std::sync::Arc;

use reggie_backend::config::Config;
use reggie_backend::db::{self, EmployeeRepository, PgEmployeeRepository};
use reggie_backend::handlers;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(io::Error::other)?;

    // Initialize the database pool and bring the schema up to date
    let pool = db::create_pool(&config).await.map_err(io::Error::other)?;
    sqlx::migrate!().run(&pool).await.map_err(io::Error::other)?;

    let repository: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool));
    let repository = web::Data::from(repository);

    info!("Starting server at {}", config.bind_address);

    let session_key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;
    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_name("session".to_owned())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            .wrap(Logger::default())
            .app_data(repository.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
