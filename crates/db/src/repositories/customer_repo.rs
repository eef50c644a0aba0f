//! Repository for the `customers` reference table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::Customer;

const COLUMNS: &str = "id, name, email, created_at";

/// Lookup operations for customers. Customer onboarding is out of band; the
/// API only validates references against this table.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, name: &str, email: &str) -> Result<Customer, sqlx::Error> {
        let query =
            format!("INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Customer>(&query)
            .bind(name)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
