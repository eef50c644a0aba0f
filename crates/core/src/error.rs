use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository and API layers.
///
/// The API layer maps each variant onto an HTTP status code; see
/// `AppError` in `helpdesk-api`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Not-found for entities addressed by a secondary key (e.g. a ticket
    /// number) rather than a database id.
    #[error("Entity not found: {entity} '{key}'")]
    NotFoundByKey { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested ticket status change is not an allowed edge.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
