//! Route definitions for admin user management.
//!
//! Mounted at `/admin` by `api_routes()`. All routes require the admin role.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// POST /users  -> create_user (admin only)
/// GET  /users  -> list_users (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(admin::list_users).post(admin::create_user))
}
