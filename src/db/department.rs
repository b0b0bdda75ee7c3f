//! Department store with CRUD operations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;

use crate::entities::{departments, prelude::*};
use crate::models::department::{Department, NewDepartment};

/// Keyed storage for department records.
///
/// Lookups never fail for a missing id or name; they return `None`.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Store a new department. The store assigns a fresh id.
    async fn insert(&self, data: NewDepartment) -> Result<Department, DbErr>;

    /// Overwrite the row with `department.id`.
    ///
    /// Returns `None` if no such row exists.
    async fn replace(&self, department: Department) -> Result<Option<Department>, DbErr>;

    /// Get department by ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DbErr>;

    /// List all departments ordered by id.
    async fn find_all(&self) -> Result<Vec<Department>, DbErr>;

    /// Delete a department by ID. Returns whether a row was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr>;

    /// Exact name match ignoring case. Among duplicates the lowest id wins.
    ///
    /// Both sides are folded by the database, so case folding is only as wide
    /// as the backend's `LOWER` (ASCII on SQLite).
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Department>, DbErr>;
}

/// [`DepartmentRepository`] backed by a SeaORM connection.
#[derive(Debug, Clone)]
pub struct SeaOrmDepartmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn insert(&self, data: NewDepartment) -> Result<Department, DbErr> {
        let model = departments::ActiveModel {
            name: Set(data.name),
            address: Set(data.address),
            code: Set(data.code),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await?;
        Ok(inserted.into())
    }

    async fn replace(&self, department: Department) -> Result<Option<Department>, DbErr> {
        let model = departments::ActiveModel {
            id: Unchanged(department.id),
            name: Set(department.name),
            address: Set(department.address),
            code: Set(department.code),
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let found = Departments::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Department::from))
    }

    async fn find_all(&self) -> Result<Vec<Department>, DbErr> {
        let rows = Departments::find()
            .order_by_asc(departments::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = Departments::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Department>, DbErr> {
        let found = Departments::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(departments::Column::Name)))
                    .eq(Func::lower(Expr::val(name.to_owned()))),
            )
            .order_by_asc(departments::Column::Id)
            .one(&self.db)
            .await?;
        Ok(found.map(Department::from))
    }
}
