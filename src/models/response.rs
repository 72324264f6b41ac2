use serde::{Deserialize, Serialize};

pub const SUCCESS_CODE: i32 = 1;
pub const ERROR_CODE: i32 = 0;

/// Uniform envelope wrapping every response body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            code: SUCCESS_CODE,
            msg: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(msg: impl Into<String>) -> Self {
        ApiResponse {
            code: ERROR_CODE,
            msg: Some(msg.into()),
            data: None,
        }
    }
}
