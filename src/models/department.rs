//! Department record and DTOs for create and update operations.

use serde::{Deserialize, Serialize};

use crate::entities::departments;

/// A stored department.
///
/// Serialized with the field names used on the wire (`departmentId`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "departmentId")]
    pub id: i32,
    #[serde(rename = "departmentName")]
    pub name: String,
    #[serde(rename = "departmentAddress")]
    pub address: Option<String>,
    #[serde(rename = "departmentCode")]
    pub code: Option<String>,
}

impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            code: model.code,
        }
    }
}

/// DTO for creating a department. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub address: Option<String>,
    pub code: Option<String>,
}

impl NewDepartment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            code: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// DTO for updating a department.
///
/// A field that is `None` or an empty string leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub address: Option<String>,
    pub code: Option<String>,
}

impl Department {
    /// Id-less copy of this record, as it would be submitted for creation.
    pub fn to_new(&self) -> NewDepartment {
        NewDepartment {
            name: self.name.clone(),
            address: self.address.clone(),
            code: self.code.clone(),
        }
    }
}
