use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// ApiError
///
/// The single error type surfaced by handlers and extractors. Every variant maps to
/// one category of the failure taxonomy: missing credential presentation, invalid
/// credential, insufficient privilege, conflict, validation failure, missing record,
/// and store/internal failure.
///
/// Rejection bodies always take the `{ "success": false, "message": "..." }` shape
/// consumed by the admin dashboard. The messages are deliberately generic: a failed
/// login never reveals whether the email or the password was wrong, and a rejected
/// token never reveals whether the signature or the expiry was at fault.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No Authorization header, or one without the `Bearer ` scheme.
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// Bad signature, malformed claims, or elapsed expiry. One message for all three.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Valid token, wrong role.
    #[error("Access denied. Admin privileges required.")]
    Forbidden,

    /// Unknown email or wrong password at login. One message for both.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Duplicate email on admin provisioning.
    #[error("Admin already exists")]
    AdminExists,

    /// A declarative validation rule failed; the message names the rule.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist (or was already deleted).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The credential/content store could not complete the operation.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    /// Anything else that should surface as a 500 (blocking-task join, hash failure).
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// HTTP status for each failure category. Client errors (4xx) carry their generic
    /// message; server errors (5xx) never carry detail from the underlying cause.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::AdminExists | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store failures are the only variant carrying a real cause; log it before
        // masking, nothing may be swallowed silently.
        if let ApiError::Database(e) = &self {
            tracing::error!("database error: {:?}", e);
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

/// is_unique_violation
///
/// Detects the loser of a concurrent-insert race on a unique column so the handler
/// can translate it to the same conflict response as the pre-insert existence check.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
