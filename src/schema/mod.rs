pub mod common;
pub mod person;
