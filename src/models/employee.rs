use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::utils::password::{self, DEFAULT_PASSWORD};
use crate::utils::serde_id;
use crate::utils::session::CurrentEmployee;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum EmployeeStatus {
    Disabled = 0,
    Enabled = 1,
}

#[derive(Debug)]
pub struct InvalidStatus(i32);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status must be 0 or 1, got {}", self.0)
    }
}

impl TryFrom<i32> for EmployeeStatus {
    type Error = InvalidStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EmployeeStatus::Disabled),
            1 => Ok(EmployeeStatus::Enabled),
            other => Err(InvalidStatus(other)),
        }
    }
}

impl From<EmployeeStatus> for i32 {
    fn from(status: EmployeeStatus) -> Self {
        status as i32
    }
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(with = "serde_id")]
    pub id: i64,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: EmployeeStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    #[serde(default, with = "serde_id::option")]
    pub create_user: Option<i64>,
    #[serde(default, with = "serde_id::option")]
    pub update_user: Option<i64>,
}

impl Employee {
    pub fn is_enabled(&self) -> bool {
        self.status == EmployeeStatus::Enabled
    }
}

/// Only emptiness is checked; any other bad input must fail the same way as
/// a wrong password.
#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body of `POST /employee`. A submitted `password` is accepted and dropped.
#[derive(Deserialize, Serialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 32))]
    pub username: String,
    #[validate(length(min = 1, max = 32))]
    pub name: String,
    #[validate(length(equal = 11))]
    pub phone: Option<String>,
    #[validate(custom = "validate_sex")]
    pub sex: Option<String>,
    #[validate(length(equal = 18))]
    pub id_number: Option<String>,
}

/// Body of `PUT /employee`. Absent fields are left untouched.
#[derive(Deserialize, Serialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(with = "serde_id")]
    pub id: i64,
    #[validate(length(min = 1, max = 32))]
    pub username: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub name: Option<String>,
    #[validate(length(equal = 11))]
    pub phone: Option<String>,
    #[validate(custom = "validate_sex")]
    pub sex: Option<String>,
    #[validate(length(equal = 18))]
    pub id_number: Option<String>,
    pub status: Option<EmployeeStatus>,
}

fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    if sex != "0" && sex != "1" {
        return Err(validator::ValidationError::new("sex must be either '0' or '1'"));
    }
    Ok(())
}

/// Audit fields written alongside every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditStamp {
    pub at: DateTime<Utc>,
    pub by: i64,
}

impl AuditStamp {
    pub fn now(actor: CurrentEmployee) -> Self {
        AuditStamp {
            at: Utc::now(),
            by: actor.id(),
        }
    }
}

/// A fully prepared row for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub username: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: EmployeeStatus,
    pub stamp: AuditStamp,
}

impl NewEmployee {
    /// Every new account starts enabled with the default password.
    pub fn from_request(request: CreateEmployeeRequest, stamp: AuditStamp) -> Self {
        NewEmployee {
            username: request.username,
            name: request.name,
            password: password::digest(DEFAULT_PASSWORD),
            phone: request.phone,
            sex: request.sex,
            id_number: request.id_number,
            status: EmployeeStatus::Enabled,
            stamp,
        }
    }
}

/// Partial update matched by id; `stamp` is always applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeChanges {
    pub id: i64,
    pub username: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub stamp: AuditStamp,
}

impl EmployeeChanges {
    pub fn from_request(request: UpdateEmployeeRequest, stamp: AuditStamp) -> Self {
        EmployeeChanges {
            id: request.id,
            username: request.username,
            name: request.name,
            phone: request.phone,
            sex: request.sex,
            id_number: request.id_number,
            status: request.status,
            stamp,
        }
    }
}
