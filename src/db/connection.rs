//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::entities::{departments, prelude::*};

/// Create a new database connection with configured pool settings.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Open a private in-memory SQLite database with the schema in place.
///
/// The pool is pinned to a single connection: every SQLite memory connection
/// is its own database.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Create the `departments` table if it does not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(departments::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Number of stored departments.
pub async fn count_departments(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Departments::find().count(db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_connection() {
        let db = connect_in_memory().await.unwrap();
        assert!(test_connection(&db).await.is_ok());
        assert_eq!(count_departments(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = connect_in_memory().await.unwrap();
        assert!(ensure_schema(&db).await.is_ok());
        assert!(ensure_schema(&db).await.is_ok());
    }
}
