use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Admin Router Module
///
/// Every mutation in the system plus the enquiry inbox. The whole router sits
/// behind the admin guard middleware, which authenticates the token *and*
/// requires the 'admin' role before any handler runs; the handlers additionally
/// take the `AdminUser` extractor, so a route added here without the layer
/// would still refuse non-admin tokens.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // POST /api/auth/register
        // Admin provisioning. Gated behind an *existing* admin token so the
        // public cannot self-register; an admin mints the next admin.
        .route("/api/auth/register", post(handlers::register))
        // --- Events ---
        .route("/api/events", post(handlers::create_event))
        .route(
            "/api/events/{id}",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        // --- Blogs ---
        .route("/api/blogs", post(handlers::create_blog))
        .route(
            "/api/blogs/{id}",
            put(handlers::update_blog).delete(handlers::delete_blog),
        )
        // --- Success Stories ---
        .route("/api/success-stories", post(handlers::create_success_story))
        .route(
            "/api/success-stories/{id}",
            put(handlers::update_success_story).delete(handlers::delete_success_story),
        )
        // --- Enquiry Inbox ---
        // Listing and reading enquiries is admin-only; the public can only submit.
        .route("/api/enquiries", get(handlers::get_enquiries))
        .route(
            "/api/enquiries/{id}",
            get(handlers::get_enquiry_by_id)
                .put(handlers::update_enquiry)
                .delete(handlers::delete_enquiry),
        )
}
