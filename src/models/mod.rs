pub mod dish;
pub mod employee;
pub mod page;
pub mod response;
