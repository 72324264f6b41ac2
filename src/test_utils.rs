//! Shared fixtures for handler tests.

use actix_http::Request;
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::memory::MemoryEmployeeRepository;
use crate::db::EmployeeRepository;
use crate::handlers;
use crate::models::employee::{Employee, EmployeeStatus};
use crate::utils::password::{self, DEFAULT_PASSWORD};

pub const SESSION_COOKIE: &str = "session";
pub const ADMIN_ID: i64 = 1;
pub const DISABLED_ID: i64 = 2;

/// Cookie sessions with a throwaway key and no `Secure` flag.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub fn employee_fixture(id: i64, username: &str, name: &str, updated: DateTime<Utc>) -> Employee {
    Employee {
        id,
        username: username.to_string(),
        name: name.to_string(),
        password: password::digest(DEFAULT_PASSWORD),
        phone: None,
        sex: None,
        id_number: None,
        status: EmployeeStatus::Enabled,
        create_time: updated,
        update_time: updated,
        create_user: None,
        update_user: None,
    }
}

/// An enabled `admin` and a disabled `disabled`, both with the default
/// password and last touched a day ago, followed by `extra`.
pub async fn init_app(
    extra: Vec<Employee>,
) -> (
    impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    Arc<MemoryEmployeeRepository>,
) {
    let yesterday = Utc::now() - Duration::days(1);
    let admin = employee_fixture(ADMIN_ID, "admin", "Administrator", yesterday);
    let disabled = Employee {
        status: EmployeeStatus::Disabled,
        ..employee_fixture(DISABLED_ID, "disabled", "Locked Clerk", yesterday)
    };

    let mut rows = vec![admin, disabled];
    rows.extend(extra);
    let repo = Arc::new(MemoryEmployeeRepository::with_employees(rows));
    let shared: Arc<dyn EmployeeRepository> = repo.clone();

    let app = test::init_service(
        App::new()
            .wrap(test_session_middleware())
            .app_data(web::Data::from(shared))
            .configure(handlers::configure),
    )
    .await;
    (app, repo)
}

pub async fn seeded_app() -> (
    impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    Arc<MemoryEmployeeRepository>,
) {
    init_app(Vec::new()).await
}

pub async fn login_as(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    username: &str,
) -> Cookie<'static> {
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/employee/login")
            .set_json(json!({ "username": username, "password": DEFAULT_PASSWORD }))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    session_cookie(&res).expect("session cookie")
}

pub async fn call_json(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: test::TestRequest,
) -> Value {
    let res = test::call_service(app, req.to_request()).await;
    test::read_body_json(res).await
}
