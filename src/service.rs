//! Department business logic.

use std::sync::Arc;

use tracing::{debug, info};

use crate::db::DepartmentRepository;
use crate::error::{AppError, Result};
use crate::models::department::{Department, NewDepartment, UpdateDepartment};

/// Message carried by every missing-department error.
pub const DEPARTMENT_NOT_FOUND: &str = "Department Not Available";

/// Orchestrates the department store.
///
/// Every lookup that misses (by id, by name, or an update of an unknown id)
/// is reported as [`AppError::NotFound`]. Deletes are idempotent.
#[derive(Clone)]
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    /// Create a new department service.
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    /// Store a new department and return it with its assigned id.
    pub async fn create(&self, data: NewDepartment) -> Result<Department> {
        let department = self.repo.insert(data).await?;
        info!("Created department {} ({})", department.id, department.name);
        Ok(department)
    }

    /// All departments.
    pub async fn list_all(&self) -> Result<Vec<Department>> {
        Ok(self.repo.find_all().await?)
    }

    /// Get department by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Department> {
        debug!("Looking up department {}", id);
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Delete a department. Deleting an unknown id succeeds.
    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        if self.repo.delete_by_id(id).await? {
            info!("Deleted department {}", id);
        } else {
            debug!("Delete of unknown department {} ignored", id);
        }
        Ok(())
    }

    /// Apply a partial update and persist the merged record.
    ///
    /// Fields that are absent or empty in `patch` keep their stored value.
    /// Nothing is created when `id` is unknown.
    pub async fn update_by_id(&self, id: i32, patch: UpdateDepartment) -> Result<Department> {
        let mut department = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;

        merge(&mut department, patch);

        let updated = self.repo.replace(department).await?.ok_or_else(not_found)?;
        info!("Updated department {}", updated.id);
        Ok(updated)
    }

    /// Case-insensitive exact name lookup.
    pub async fn get_by_name(&self, name: &str) -> Result<Department> {
        debug!("Looking up department by name {:?}", name);
        self.repo.find_by_name_ignore_case(name).await?.ok_or_else(not_found)
    }
}

fn not_found() -> AppError {
    AppError::not_found(DEPARTMENT_NOT_FOUND)
}

/// Overwrite the fields of `department` that `patch` carries a non-empty value for.
///
/// An empty string means "no change", so a field can never be cleared this way.
pub fn merge(department: &mut Department, patch: UpdateDepartment) {
    if let Some(name) = non_empty(patch.name) {
        department.name = name;
    }
    if let Some(address) = non_empty(patch.address) {
        department.address = Some(address);
    }
    if let Some(code) = non_empty(patch.code) {
        department.code = Some(code);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{SeaOrmDepartmentRepository, connect_in_memory};

    async fn service() -> DepartmentService {
        let db = connect_in_memory().await.unwrap();
        DepartmentService::new(Arc::new(SeaOrmDepartmentRepository::new(db)))
    }

    fn it_department() -> NewDepartment {
        NewDepartment::new("IT").with_address("Hyderabad").with_code("IT-06")
    }

    fn stored(name: &str, address: Option<&str>, code: Option<&str>) -> Department {
        Department {
            id: 1,
            name: name.to_string(),
            address: address.map(str::to_string),
            code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_merge_empty_strings_are_ignored() {
        let mut department = stored("IT", Some("Hyderabad"), Some("IT-06"));
        merge(
            &mut department,
            UpdateDepartment {
                name: Some(String::new()),
                address: Some("Pune".to_string()),
                code: Some(String::new()),
            },
        );
        assert_eq!(department, stored("IT", Some("Pune"), Some("IT-06")));
    }

    #[test]
    fn test_merge_name_only() {
        let mut department = stored("IT", Some("Hyderabad"), Some("IT-06"));
        merge(
            &mut department,
            UpdateDepartment {
                name: Some("NewName".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(department, stored("NewName", Some("Hyderabad"), Some("IT-06")));
    }

    #[test]
    fn test_merge_fills_absent_fields() {
        let mut department = stored("IT", None, None);
        merge(
            &mut department,
            UpdateDepartment {
                address: Some("India".to_string()),
                code: Some("IT-30".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(department, stored("IT", Some("India"), Some("IT-30")));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service().await;
        let created = service.create(it_department()).await.unwrap();

        let found = service.get_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.to_new(), it_department());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let service = service().await;
        let a = service.create(it_department()).await.unwrap();
        let b = service.create(it_department()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service().await;
        let err = service.get_by_id(1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), DEPARTMENT_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = service().await;
        let created = service.create(it_department()).await.unwrap();

        service.delete_by_id(created.id).await.unwrap();
        assert!(service.get_by_id(created.id).await.unwrap_err().is_not_found());

        // Unknown ids delete silently.
        service.delete_by_id(created.id).await.unwrap();
        service.delete_by_id(12345).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let service = service().await;
        let created = service.create(it_department()).await.unwrap();

        let patch = UpdateDepartment {
            name: Some(String::new()),
            address: Some("Pune".to_string()),
            code: Some(String::new()),
        };
        let updated = service.update_by_id(created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "IT");
        assert_eq!(updated.address.as_deref(), Some("Pune"));
        assert_eq!(updated.code.as_deref(), Some("IT-06"));
        assert_eq!(service.get_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_creates_nothing() {
        let service = service().await;
        service.create(it_department()).await.unwrap();

        let patch = UpdateDepartment {
            name: Some("Finance".to_string()),
            ..Default::default()
        };
        let err = service.update_by_id(999, patch).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_name_ignores_case() {
        let service = service().await;
        let created = service.create(it_department()).await.unwrap();

        assert_eq!(service.get_by_name("it").await.unwrap(), created);
        assert_eq!(service.get_by_name("IT").await.unwrap(), created);
        assert!(service.get_by_name("HR").await.unwrap_err().is_not_found());
    }
}
