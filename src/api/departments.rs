//! `/departments` endpoints.
//!
//! - `POST   /departments`              create
//! - `GET    /departments`              list all
//! - `GET    /departments/:id`          fetch by id
//! - `PUT    /departments/:id`          partial update
//! - `DELETE /departments/:id`          delete (idempotent)
//! - `GET    /departments/name/:name`   fetch by name, ignoring case

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::extract::{ApiJson, ApiPath};
use crate::error::{AppError, Result};
use crate::models::department::{Department, NewDepartment, UpdateDepartment};

pub const NAME_REQUIRED: &str = "Please Add Department Name";
pub const DELETED: &str = "Department Deleted Successfully!";

/// Request body for create and update.
///
/// `departmentId` is ignored if a client sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentPayload {
    #[serde(rename = "departmentName", default)]
    pub name: Option<String>,
    #[serde(rename = "departmentAddress", default)]
    pub address: Option<String>,
    #[serde(rename = "departmentCode", default)]
    pub code: Option<String>,
}

impl DepartmentPayload {
    /// Validate for creation: the name must be present and not blank.
    pub fn into_new(self) -> Result<NewDepartment> {
        match self.name {
            Some(name) if !name.trim().is_empty() => Ok(NewDepartment {
                name,
                address: self.address,
                code: self.code,
            }),
            _ => Err(AppError::validation(NAME_REQUIRED)),
        }
    }

    /// Validate for update.
    ///
    /// An absent or empty name leaves the stored one alone; a whitespace-only
    /// name would store a blank name and is rejected.
    pub fn into_update(self) -> Result<UpdateDepartment> {
        if matches!(&self.name, Some(name) if !name.is_empty() && name.trim().is_empty()) {
            return Err(AppError::validation(NAME_REQUIRED));
        }
        Ok(UpdateDepartment {
            name: self.name,
            address: self.address,
            code: self.code,
        })
    }
}

/// POST /departments
pub async fn create(State(service): State<AppState>, ApiJson(payload): ApiJson<DepartmentPayload>) -> Result<Json<Department>> {
    let data = payload.into_new()?;
    Ok(Json(service.create(data).await?))
}

/// GET /departments
pub async fn list(State(service): State<AppState>) -> Result<Json<Vec<Department>>> {
    Ok(Json(service.list_all().await?))
}

/// GET /departments/:id
pub async fn get_by_id(State(service): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Department>> {
    Ok(Json(service.get_by_id(id).await?))
}

/// PUT /departments/:id
pub async fn update(
    State(service): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<DepartmentPayload>,
) -> Result<Json<Department>> {
    let patch = payload.into_update()?;
    Ok(Json(service.update_by_id(id, patch).await?))
}

/// DELETE /departments/:id
pub async fn delete(State(service): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<&'static str> {
    service.delete_by_id(id).await?;
    Ok(DELETED)
}

/// GET /departments/name/:name
pub async fn get_by_name(State(service): State<AppState>, ApiPath(name): ApiPath<String>) -> Result<Json<Department>> {
    Ok(Json(service.get_by_name(&name).await?))
}
