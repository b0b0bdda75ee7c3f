//! Database connection pool and the department store.

pub mod connection;
pub mod department;

pub use connection::{connect, connect_in_memory, count_departments, ensure_schema, test_connection};
pub use department::{DepartmentRepository, SeaOrmDepartmentRepository};
