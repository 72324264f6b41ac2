//! Session helpers.
//!
//! Handlers never read the session directly. Login and logout go through
//! [`SessionContext`]; every other handler receives the authenticated id as a
//! [`CurrentEmployee`] argument and passes it on explicitly.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::errors::AppError;

pub const EMPLOYEE_KEY: &str = "employee";

#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the authenticated employee id to the session cookie.
    pub fn persist_employee(&self, employee_id: i64) -> Result<(), AppError> {
        self.0.renew();
        self.0.insert(EMPLOYEE_KEY, employee_id).map_err(|err| {
            AppError::InternalServerError(format!("failed to persist session: {}", err))
        })
    }

    /// An unreadable id counts as no session.
    pub fn employee_id(&self) -> Option<i64> {
        self.0
            .get::<i64>(EMPLOYEE_KEY)
            .unwrap_or_else(|err| {
                log::warn!("unreadable employee id in session cookie: {}", err);
                None
            })
    }

    pub fn require_employee(&self) -> Result<CurrentEmployee, AppError> {
        self.employee_id()
            .map(CurrentEmployee)
            .ok_or(AppError::NotLoggedIn)
    }

    /// Drop all session state and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Id of the employee bound to the current request's session.
///
/// Extracting it fails with `NOTLOGIN` when the request carries no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentEmployee(pub i64);

impl CurrentEmployee {
    pub fn id(self) -> i64 {
        self.0
    }
}

impl FromRequest for CurrentEmployee {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        Box::pin(async move { Ok(fut.await?.require_employee()?) })
    }
}
