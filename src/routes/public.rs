use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any client
/// (the marketing site, mobile clients, monitoring). These routes cover the
/// read-only content the site renders, the login gateway, and the one anonymous
/// write in the system: the contact-form enquiry.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness endpoint used for monitoring and load balancer checks.
        .route("/health", get(handlers::health_check))
        // GET /
        // Service banner with an index of the mounted endpoint groups.
        .route("/", get(handlers::root_index))
        // POST /api/auth/login
        // Exchanges email + password for a session token. The only entry point
        // into the authenticated surface.
        .route("/api/auth/login", post(handlers::login))
        // GET /api/events?category=...&status=...&limit=...&offset=...
        // Portfolio/event listings with filtering and pagination.
        .route("/api/events", get(handlers::get_events))
        .route("/api/events/{id}", get(handlers::get_event_by_id))
        // GET /api/blogs?status=...&search=...
        // Blog listings; `search` matches title and body case-insensitively.
        .route("/api/blogs", get(handlers::get_blogs))
        .route("/api/blogs/{id}", get(handlers::get_blog_by_id))
        // GET /api/success-stories?category=...&featured=...
        // Testimonials; the home page requests featured=true.
        .route("/api/success-stories", get(handlers::get_success_stories))
        .route(
            "/api/success-stories/{id}",
            get(handlers::get_success_story_by_id),
        )
        // POST /api/enquiries
        // Public contact-form submission. Status is stamped 'pending' server-side.
        .route("/api/enquiries", post(handlers::create_enquiry))
}
