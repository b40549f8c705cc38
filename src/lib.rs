use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

// Module for routing segregation (Public, Authenticated, Admin).
pub mod routes;
use auth::{AdminUser, AuthUser};
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use error::ApiError;
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the application.
/// It aggregates all API paths and data schemas decorated with the
/// `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros.
/// The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    // List all public handler functions here for documentation generation.
    paths(
        handlers::login, handlers::register, handlers::get_profile,
        handlers::get_events, handlers::get_event_by_id, handlers::create_event,
        handlers::update_event, handlers::delete_event,
        handlers::get_blogs, handlers::get_blog_by_id, handlers::create_blog,
        handlers::update_blog, handlers::delete_blog,
        handlers::get_enquiries, handlers::get_enquiry_by_id, handlers::create_enquiry,
        handlers::update_enquiry, handlers::delete_enquiry,
        handlers::get_success_stories, handlers::get_success_story_by_id,
        handlers::create_success_story, handlers::update_success_story,
        handlers::delete_success_story,
    ),
    // List all models (schemas) used in the request/response bodies.
    components(
        schemas(
            models::Event, models::Blog, models::Enquiry, models::SuccessStory,
            models::CreateEventRequest, models::UpdateEventRequest,
            models::CreateBlogRequest, models::UpdateBlogRequest,
            models::CreateEnquiryRequest, models::UpdateEnquiryRequest,
            models::CreateSuccessStoryRequest, models::UpdateSuccessStoryRequest,
            models::LoginRequest, models::RegisterRequest,
            models::AuthData, models::AuthenticatedUser, models::AdminProfile,
            models::Pagination, auth::Role,
        )
    ),
    tags(
        (name = "royalstar-portal", description = "Royal STAR Event Management API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the application services
/// and configuration, shared across all incoming requests. The gate keeps no
/// session table and no cache: tokens are self-contained, so the only shared
/// mutable resource in the whole system is the database behind `repo`.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations let extractors selectively pull components from the shared
// AppState; the token verifier receives the signing secret through here rather than
// through any process-global lookup.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces plain authentication for the `authenticated_routes`.
///
/// *Mechanism*: it attempts to extract `AuthUser` from the request. Since `AuthUser`
/// implements `FromRequestParts`, a missing or invalid token rejects the request with
/// the structured 401 body before the handler executes; a valid token lets the
/// request proceed.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// admin_middleware
///
/// Enforces authentication *and* the 'admin' role for the `admin_routes`. A valid
/// token with any other role value is rejected with the structured 403 body.
async fn admin_middleware(_admin: AdminUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and scoped
/// middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: No middleware applied.
        .merge(public::public_routes())
        // Plain-auth Routes: any valid token admits.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Admin Routes: valid token + 'admin' role claim required. All mutation
        // endpoints and the enquiry inbox live here.
        .merge(
            admin::admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware)),
        )
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in a span
                // carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns x-request-id to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation. It extracts the
/// `x-request-id` header (if present) and includes it in the structured logging
/// metadata alongside the HTTP method and URI, so every log line for a single
/// request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
