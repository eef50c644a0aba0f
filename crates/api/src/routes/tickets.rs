//! Route definitions for tickets.
//!
//! Mounted at `/tickets` by `api_routes()`. All routes require auth.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tickets;
use crate::state::AppState;

/// Ticket routes.
///
/// ```text
/// POST   /                   -> create_ticket
/// GET    /                   -> list_tickets
/// GET    /{id}               -> get_ticket
/// GET    /number/{number}    -> get_ticket_by_number
/// PUT    /{id}/status        -> update_ticket_status
/// PUT    /{id}/assign        -> assign_ticket
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route("/number/{number}", get(tickets::get_ticket_by_number))
        .route("/{id}", get(tickets::get_ticket))
        .route("/{id}/status", put(tickets::update_ticket_status))
        .route("/{id}/assign", put(tickets::assign_ticket))
}
