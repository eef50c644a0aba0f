//! Repository for the `tickets` table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::ticket::{NewTicket, Ticket, TicketFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, number, subject, description, priority, status, \
    department_id, customer_id, assigned_agent_id, \
    sla_deadline, created_at, updated_at";

/// Provides CRUD operations for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Insert a new ticket, returning the full row.
    ///
    /// New tickets always start in the `open` status. A collision on the
    /// ticket number surfaces as a unique-constraint error
    /// (`uq_tickets_number`); callers may regenerate and retry.
    pub async fn create(pool: &PgPool, input: &NewTicket) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets \
                (number, subject, description, priority, status, \
                 department_id, customer_id, sla_deadline, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, 'open', $5, $6, $7, $8, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(&input.number)
            .bind(&input.subject)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.department_id)
            .bind(input.customer_id)
            .bind(input.sla_deadline)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a ticket by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a ticket by its human-readable number.
    pub async fn find_by_number(
        pool: &PgPool,
        number: &str,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE number = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// List tickets matching the filter, newest first (ties broken by id).
    ///
    /// Filters combine with AND; the free-text filter matches subject or
    /// description case-insensitively.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &TicketFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Ticket>, sqlx::Error> {
        let (where_clause, next_idx) = build_where_clause(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM tickets {where_clause} \
             ORDER BY created_at DESC, id ASC \
             LIMIT ${next_idx} OFFSET ${}",
            next_idx + 1
        );

        let mut q = sqlx::query_as::<_, Ticket>(&query);
        q = bind_filter(q, filter);
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Count tickets matching the filter, independent of pagination.
    pub async fn count_filtered(pool: &PgPool, filter: &TicketFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = build_where_clause(filter);
        let query = format!("SELECT COUNT(*) FROM tickets {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = &filter.status {
            q = q.bind(s);
        }
        if let Some(p) = &filter.priority {
            q = q.bind(p);
        }
        if let Some(text) = &filter.q {
            q = q.bind(format!("%{text}%"));
        }

        q.fetch_one(pool).await
    }

    /// Update the status of a ticket, refreshing `updated_at`.
    ///
    /// Returns the updated row, or `None` if no ticket with the id exists.
    /// Transition validity is checked by the caller before calling this.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(new_status)
            .fetch_optional(pool)
            .await
    }

    /// Assign an agent to a ticket, refreshing `updated_at`.
    ///
    /// Returns the updated row, or `None` if no ticket with the id exists.
    /// The caller verifies that `agent_id` refers to an active agent.
    pub async fn assign(
        pool: &PgPool,
        id: DbId,
        agent_id: DbId,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET assigned_agent_id = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(agent_id)
            .fetch_optional(pool)
            .await
    }
}

/// Build the WHERE clause for a [`TicketFilter`], returning the clause and
/// the next free bind-parameter index.
fn build_where_clause(filter: &TicketFilter) -> (String, usize) {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_idx: usize = 1;

    if filter.status.is_some() {
        conditions.push(format!("status = ${param_idx}"));
        param_idx += 1;
    }
    if filter.priority.is_some() {
        conditions.push(format!("priority = ${param_idx}"));
        param_idx += 1;
    }
    if filter.q.is_some() {
        conditions.push(format!(
            "(subject ILIKE ${param_idx} OR description ILIKE ${param_idx})"
        ));
        param_idx += 1;
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (clause, param_idx)
}

/// Bind filter values in the same order `build_where_clause` numbered them.
fn bind_filter<'q>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, Ticket, sqlx::postgres::PgArguments>,
    filter: &'q TicketFilter,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Ticket, sqlx::postgres::PgArguments> {
    if let Some(s) = &filter.status {
        q = q.bind(s);
    }
    if let Some(p) = &filter.priority {
        q = q.bind(p);
    }
    if let Some(text) = &filter.q {
        q = q.bind(format!("%{text}%"));
    }
    q
}
