//! Customer reference entity.

use helpdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}
