//! Handlers for the `/tickets` resource.
//!
//! All endpoints require authentication. Ticket responses carry a derived
//! `urgency` bucket computed from the SLA deadline at response time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use helpdesk_core::error::CoreError;
use helpdesk_core::types::DbId;
use helpdesk_core::{pagination, sla, ticket};
use helpdesk_db::models::ticket::{NewTicket, Ticket, TicketFilter, TicketListParams};
use helpdesk_db::repositories::{CustomerRepo, DepartmentRepo, TicketRepo, UserRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// Attempts at generating a non-colliding ticket number before giving up.
const NUMBER_RETRY_ATTEMPTS: u32 = 3;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /tickets`.
#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub priority: String,
    pub department_id: DbId,
    pub customer_id: DbId,
}

/// Request body for `PUT /tickets/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub new_status: String,
}

/// Request body for `PUT /tickets/{id}/assign`.
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub agent_id: DbId,
}

/// A ticket plus its urgency bucket, derived from the SLA deadline at
/// response time (the deadline itself is never recomputed).
#[derive(Debug, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub urgency: sla::Urgency,
}

impl TicketView {
    fn now(ticket: Ticket) -> Self {
        let urgency = sla::classify_urgency(ticket.sla_deadline, Utc::now());
        TicketView { ticket, urgency }
    }
}

// ---------------------------------------------------------------------------
// POST /tickets
// ---------------------------------------------------------------------------

/// Create a new ticket.
///
/// Validates the subject, description, priority, and department/customer
/// references, then inserts the ticket with status `open` and an SLA deadline
/// computed from the priority table.
pub async fn create_ticket(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTicketRequest>,
) -> AppResult<impl IntoResponse> {
    ticket::validate_subject(&input.subject)?;
    ticket::validate_description(&input.description)?;
    sla::validate_priority(&input.priority)?;

    // Reference checks surface as validation failures, not 404s: the ticket
    // itself is the resource being created.
    if DepartmentRepo::find_by_id(&state.pool, input.department_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown department id {}",
            input.department_id
        ))));
    }
    if CustomerRepo::find_by_id(&state.pool, input.customer_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown customer id {}",
            input.customer_id
        ))));
    }

    let created_at = Utc::now();
    let sla_deadline = sla::compute_deadline(&input.priority, created_at)?;

    // The random suffix can collide on the unique number index; regenerate
    // and retry a bounded number of times before surfacing the conflict.
    let mut attempt = 0;
    let created = loop {
        let new_ticket = NewTicket {
            number: ticket::generate_ticket_number(created_at),
            subject: input.subject.clone(),
            description: input.description.clone(),
            priority: input.priority.clone(),
            department_id: input.department_id,
            customer_id: input.customer_id,
            sla_deadline,
            created_at,
        };

        match TicketRepo::create(&state.pool, &new_ticket).await {
            Ok(t) => break t,
            Err(e) if is_unique_violation(&e, "uq_tickets_number") => {
                attempt += 1;
                if attempt >= NUMBER_RETRY_ATTEMPTS {
                    return Err(AppError::Database(e));
                }
            }
            Err(e) => return Err(AppError::Database(e)),
        }
    };

    tracing::info!(
        ticket_id = created.id,
        number = %created.number,
        priority = %created.priority,
        user_id = auth.user_id,
        "Ticket created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TicketView::now(created),
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /tickets
// ---------------------------------------------------------------------------

/// List tickets with optional status/priority/free-text filters and
/// pagination. Filters combine with AND; ordering is newest-first with ties
/// broken by id.
pub async fn list_tickets(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TicketListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        ticket::validate_status(s)?;
    }
    if let Some(ref p) = params.priority {
        sla::validate_priority(p)?;
    }

    let page = pagination::clamp_page(params.page);
    let page_size = pagination::clamp_page_size(
        params.page_size,
        pagination::DEFAULT_PAGE_SIZE,
        pagination::MAX_PAGE_SIZE,
    );

    let filter = TicketFilter {
        status: params.status,
        priority: params.priority,
        q: params.q,
    };

    let total = TicketRepo::count_filtered(&state.pool, &filter).await?;
    let tickets = TicketRepo::list_filtered(
        &state.pool,
        &filter,
        page_size,
        pagination::offset(page, page_size),
    )
    .await?;

    let now = Utc::now();
    let items: Vec<TicketView> = tickets
        .into_iter()
        .map(|t| {
            let urgency = sla::classify_urgency(t.sla_deadline, now);
            TicketView { ticket: t, urgency }
        })
        .collect();

    Ok(Json(DataResponse {
        data: Paginated {
            items,
            total,
            page,
            page_size,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /tickets/{id}
// ---------------------------------------------------------------------------

/// Get a single ticket by ID.
pub async fn get_ticket(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;

    Ok(Json(DataResponse {
        data: TicketView::now(found),
    }))
}

// ---------------------------------------------------------------------------
// GET /tickets/number/{number}
// ---------------------------------------------------------------------------

/// Get a single ticket by its human-readable number.
pub async fn get_ticket_by_number(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> AppResult<impl IntoResponse> {
    let found = TicketRepo::find_by_number(&state.pool, &number)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Ticket",
                key: number.clone(),
            })
        })?;

    Ok(Json(DataResponse {
        data: TicketView::now(found),
    }))
}

// ---------------------------------------------------------------------------
// PUT /tickets/{id}/status
// ---------------------------------------------------------------------------

/// Update a ticket's status.
///
/// Rejects unknown statuses (400), missing tickets (404), and disallowed
/// transitions (400 with `INVALID_TRANSITION`).
pub async fn update_ticket_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    ticket::validate_status(&input.new_status)?;

    let current = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;

    ticket::validate_transition(&current.status, &input.new_status)?;

    let updated = TicketRepo::update_status(&state.pool, id, &input.new_status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;

    tracing::info!(
        ticket_id = id,
        from = %current.status,
        to = %input.new_status,
        user_id = auth.user_id,
        "Ticket status updated",
    );

    Ok(Json(DataResponse {
        data: TicketView::now(updated),
    }))
}

// ---------------------------------------------------------------------------
// PUT /tickets/{id}/assign
// ---------------------------------------------------------------------------

/// Assign an agent to a ticket.
///
/// The ticket existence check runs first so a missing ticket is reported as
/// 404 regardless of the agent id. The agent must be an active user with the
/// `agent` role.
pub async fn assign_ticket(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignRequest>,
) -> AppResult<impl IntoResponse> {
    if TicketRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }));
    }

    let agent = UserRepo::find_by_id(&state.pool, input.agent_id).await?;
    let agent_valid = agent
        .map(|u| u.is_active && u.role == helpdesk_core::roles::ROLE_AGENT)
        .unwrap_or(false);
    if !agent_valid {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Agent",
            id: input.agent_id,
        }));
    }

    let updated = TicketRepo::assign(&state.pool, id, input.agent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;

    tracing::info!(
        ticket_id = id,
        agent_id = input.agent_id,
        user_id = auth.user_id,
        "Ticket assigned",
    );

    Ok(Json(DataResponse {
        data: TicketView::now(updated),
    }))
}
