//! Ticket entity model and DTOs.

use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tickets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ticket {
    pub id: DbId,
    /// Human-readable ticket number, e.g. `TKT-20260815-042731`.
    pub number: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub department_id: DbId,
    pub customer_id: DbId,
    pub assigned_agent_id: Option<DbId>,
    /// Fixed at creation from the priority table; never recomputed.
    pub sla_deadline: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new ticket.
///
/// `number`, `created_at`, and `sla_deadline` are computed by the caller so
/// the SLA invariant (`sla_deadline == created_at + table hours`) holds
/// exactly, independent of database clock skew.
#[derive(Debug)]
pub struct NewTicket {
    pub number: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub department_id: DbId,
    pub customer_id: DbId,
    pub sla_deadline: Timestamp,
    pub created_at: Timestamp,
}

/// Optional filters for listing tickets, combined with logical AND.
#[derive(Debug, Default)]
pub struct TicketFilter {
    /// Exact status match.
    pub status: Option<String>,
    /// Exact priority match.
    pub priority: Option<String>,
    /// Case-insensitive substring match against subject and description.
    pub q: Option<String>,
}

/// Query parameters accepted by `GET /tickets`.
#[derive(Debug, Deserialize)]
pub struct TicketListParams {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub q: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
