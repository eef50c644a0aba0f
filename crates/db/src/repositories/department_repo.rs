//! Repository for the `departments` reference table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::Department;

const COLUMNS: &str = "id, name, created_at";

/// Lookup operations for departments. Departments are managed out of band;
/// the API only validates references against them.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Department, sqlx::Error> {
        let query = format!("INSERT INTO departments (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Department>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a department by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all departments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }
}
