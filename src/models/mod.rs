//! Data models for departments.

pub mod department;

pub use department::{Department, NewDepartment, UpdateDepartment};
