//! Handlers for the `/admin` resource (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::roles;
use helpdesk_db::models::user::{CreateUser, UserResponse};
use helpdesk_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length enforced on user creation.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    /// `admin` or `agent`; customer accounts are provisioned elsewhere.
    pub role: String,
}

/// POST /api/v1/admin/users
///
/// Create an agent or admin account. Duplicate emails are a 409 Conflict.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    roles::validate_staff_role(&input.role)?;

    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email address is required".into(),
        )));
    }
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Explicit duplicate check for a clear message; the uq_users_email
    // constraint remains the backstop under concurrent creation.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A user with email '{}' already exists",
            input.email
        ))));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            name: input.name,
            password_hash: hashed,
            role: input.role,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %user.role,
        created_by = admin.user_id,
        "User account created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// GET /api/v1/admin/users
///
/// List all user accounts, newest first.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data: responses }))
}
