pub mod admin;
pub mod auth;
pub mod health;
pub mod tickets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
/// /auth/refresh                refresh (public)
/// /auth/logout                 logout (requires auth)
///
/// /tickets                     list, create (requires auth)
/// /tickets/{id}                get
/// /tickets/number/{number}     get by ticket number
/// /tickets/{id}/status         update status (PUT)
/// /tickets/{id}/assign         assign agent (PUT)
///
/// /admin/users                 list, create (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tickets", tickets::router())
        .nest("/admin", admin::router())
}
