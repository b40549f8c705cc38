use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Authenticated Router Module
///
/// Routes behind the plain-auth guard: any validly signed, unexpired token is
/// admitted, with no role check. Today that is only the self-profile read — the
/// one place where authentication alone (who are you) suffices without
/// authorization (what may you do).
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /api/auth/profile
        // Returns the caller's own sanitized admin record, resolved from the
        // id claim in the presented token.
        .route("/api/auth/profile", get(handlers::get_profile))
}
