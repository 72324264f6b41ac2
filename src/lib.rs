//! Employee management back office for the restaurant.
//!
//! ```text
//! POST /employee/login   {"username":"admin","password":"123456"}
//! POST /employee/logout
//! POST /employee         create, password is always the default
//! PUT  /employee         partial update by id
//! GET  /employee/page?page=1&pageSize=10&name=li
//! GET  /employee/{id}
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
