pub use super::departments::Entity as Departments;
