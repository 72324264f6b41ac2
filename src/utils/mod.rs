pub mod password;
pub mod serde_id;
pub mod session;
pub mod validation;
