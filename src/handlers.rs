use crate::{
    AppState, auth,
    auth::{AdminUser, AuthUser},
    error::{ApiError, is_unique_violation},
    models::{
        AdminProfile, ApiResponse, AuthData, AuthenticatedUser, Blog, CONTENT_STATUSES,
        CreateBlogRequest, CreateEnquiryRequest, CreateEventRequest, CreateSuccessStoryRequest,
        EVENT_CATEGORIES, Enquiry, Event, ListResponse, LoginRequest, RegisterRequest,
        STORY_CATEGORIES, SuccessStory, UpdateBlogRequest, UpdateEnquiryRequest,
        UpdateEventRequest, UpdateSuccessStoryRequest,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

// --- Filter Structs ---

/// EventFilter
///
/// Accepted query parameters for GET /api/events.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct EventFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// BlogFilter
///
/// Accepted query parameters for GET /api/blogs. `search` matches title and body
/// case-insensitively.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct BlogFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// EnquiryFilter
#[derive(Deserialize, utoipa::IntoParams)]
pub struct EnquiryFilter {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// StoryFilter
#[derive(Deserialize, utoipa::IntoParams)]
pub struct StoryFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

const DEFAULT_LIMIT: i64 = 50;

fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (limit.unwrap_or(DEFAULT_LIMIT).max(1), offset.unwrap_or(0).max(0))
}

// --- Validation Helpers ---
//
// Declarative field rules carried over from the admin dashboard's contract.
// Each returns the rule message on violation; handlers fail before touching
// the repository.

fn normalize_email(email: &str) -> Result<String, ApiError> {
    let email = email.trim().to_lowercase();
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });
    if !valid {
        return Err(ApiError::Validation("Valid email is required".to_string()));
    }
    Ok(email)
}

fn check_len(value: &str, min: usize, max: usize, message: &str) -> Result<(), ApiError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

fn check_category(category: &str, allowed: &[&str]) -> Result<(), ApiError> {
    if !allowed.contains(&category) {
        return Err(ApiError::Validation("Invalid category".to_string()));
    }
    Ok(())
}

fn check_status(status: &str) -> Result<(), ApiError> {
    if !CONTENT_STATUSES.contains(&status) {
        return Err(ApiError::Validation("Invalid status".to_string()));
    }
    Ok(())
}

fn check_phone(phone: &str) -> Result<(), ApiError> {
    let phone = phone.trim();
    let shape_ok = phone
        .chars()
        .all(|c| c.is_ascii_digit() || "+-() ".contains(c));
    if !shape_ok || phone.len() < 10 || phone.len() > 15 {
        return Err(ApiError::Validation(
            "Valid phone number is required".to_string(),
        ));
    }
    Ok(())
}

// --- Auth Handlers ---

/// login
///
/// [Public Route] Exchanges email + password for a session token.
///
/// *Enumeration resistance*: unknown email and wrong password produce the same
/// "Invalid credentials" 401. A store failure is a 500, never a 401 — the caller
/// must be able to tell "you are wrong" from "we are down".
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthData),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    let email = normalize_email(&payload.email)?;
    check_len(
        &payload.password,
        6,
        usize::MAX,
        "Password must be at least 6 characters",
    )?;

    let admin = state
        .repo
        .find_admin_by_email(&email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    // bcrypt comparison is CPU-bound; keep it off the async executor.
    let password = payload.password;
    let hash = admin.password_hash.clone();
    let matched = tokio::task::spawn_blocking(move || auth::verify_password(&password, &hash))
        .await
        .map_err(|_| ApiError::Internal)?;

    if !matched {
        return Err(ApiError::InvalidCredentials);
    }

    let token = auth::issue_token(&admin, &state.config)?;

    Ok(Json(ApiResponse::ok_with_message(
        "Login successful",
        AuthData {
            token,
            user: AuthenticatedUser::from(&admin),
        },
    )))
}

/// register
///
/// [Admin Route] Provisions a new administrator account. Deliberately *not* a public
/// signup: only a caller holding a valid admin token can mint another admin, so the
/// out-of-band provisioning path stays closed to the public.
///
/// Duplicate emails are rejected up front; if two registrations race past the check,
/// the database's unique constraint decides and the loser receives the same conflict
/// response. The returned token belongs to the *new* account, not the inviter.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin registered", body = AuthData),
        (status = 400, description = "Admin already exists")
    )
)]
pub async fn register(
    AdminUser(_inviter): AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    let email = normalize_email(&payload.email)?;
    check_len(
        &payload.password,
        6,
        usize::MAX,
        "Password must be at least 6 characters",
    )?;
    check_len(
        &payload.name,
        2,
        usize::MAX,
        "Name must be at least 2 characters",
    )?;

    if state.repo.find_admin_by_email(&email).await?.is_some() {
        return Err(ApiError::AdminExists);
    }

    let password = payload.password;
    let password_hash = tokio::task::spawn_blocking(move || auth::hash_password(&password))
        .await
        .map_err(|_| ApiError::Internal)??;

    let admin = state
        .repo
        .create_admin(&email, &password_hash, payload.name.trim())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::AdminExists
            } else {
                ApiError::from(e)
            }
        })?;

    let token = auth::issue_token(&admin, &state.config)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Admin registered successfully",
            AuthData {
                token,
                user: AuthenticatedUser::from(&admin),
            },
        )),
    ))
}

/// get_profile
///
/// [Authenticated Route] Returns the caller's own sanitized record, fetched fresh
/// from the store by the id carried in the token.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Profile", body = AdminProfile),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AdminProfile>>, ApiError> {
    let admin = state
        .repo
        .get_admin(user.id)
        .await?
        .ok_or(ApiError::NotFound("Admin"))?;

    Ok(Json(ApiResponse::ok(AdminProfile::from(&admin))))
}

// --- Event Handlers ---

/// get_events
///
/// [Public Route] Lists events with category/status filtering and pagination,
/// newest first.
#[utoipa::path(
    get,
    path = "/api/events",
    params(EventFilter),
    responses((status = 200, description = "List filtered events", body = [Event]))
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let (limit, offset) = page(filter.limit, filter.offset);
    let (events, total) = state
        .repo
        .list_events(filter.category, filter.status, limit, offset)
        .await?;
    Ok(Json(ListResponse::new(events, total, limit, offset)))
}

/// get_event_by_id
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Found", body = Event),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state
        .repo
        .get_event(id)
        .await?
        .ok_or(ApiError::NotFound("Event"))?;
    Ok(Json(ApiResponse::ok(event)))
}

/// create_event
///
/// [Admin Route] Creates an event; `created_by` is taken from the authenticated
/// admin, never from the payload.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses((status = 201, description = "Created", body = Event))
)]
pub async fn create_event(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>), ApiError> {
    check_len(
        &payload.title,
        3,
        200,
        "Title must be between 3 and 200 characters",
    )?;
    check_len(
        &payload.description,
        10,
        usize::MAX,
        "Description must be at least 10 characters",
    )?;
    check_category(&payload.category, EVENT_CATEGORIES)?;
    if let Some(status) = &payload.status {
        check_status(status)?;
    }

    let event = state.repo.create_event(payload, admin.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Event created successfully",
            event,
        )),
    ))
}

/// update_event
///
/// [Admin Route] Partial update; absent fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated", body = Event),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_event(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    if let Some(category) = &payload.category {
        check_category(category, EVENT_CATEGORIES)?;
    }
    if let Some(status) = &payload.status {
        check_status(status)?;
    }

    let event = state
        .repo
        .update_event(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Event"))?;
    Ok(Json(ApiResponse::ok_with_message(
        "Event updated successfully",
        event,
    )))
}

/// delete_event
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_event(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.repo.delete_event(id).await? {
        return Err(ApiError::NotFound("Event"));
    }
    Ok(Json(ApiResponse::message_only("Event deleted successfully")))
}

// --- Blog Handlers ---

/// get_blogs
///
/// [Public Route] Lists blogs with status filtering and title/body search.
#[utoipa::path(
    get,
    path = "/api/blogs",
    params(BlogFilter),
    responses((status = 200, description = "List filtered blogs", body = [Blog]))
)]
pub async fn get_blogs(
    State(state): State<AppState>,
    Query(filter): Query<BlogFilter>,
) -> Result<Json<ListResponse<Blog>>, ApiError> {
    let (limit, offset) = page(filter.limit, filter.offset);
    let (blogs, total) = state
        .repo
        .list_blogs(filter.status, filter.search, limit, offset)
        .await?;
    Ok(Json(ListResponse::new(blogs, total, limit, offset)))
}

/// get_blog_by_id
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Found", body = Blog),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_blog_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Blog>>, ApiError> {
    let blog = state
        .repo
        .get_blog(id)
        .await?
        .ok_or(ApiError::NotFound("Blog"))?;
    Ok(Json(ApiResponse::ok(blog)))
}

/// create_blog
///
/// [Admin Route] Creates a blog post. SEO fields and the slug default server-side
/// when the dashboard omits them.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses((status = 201, description = "Created", body = Blog))
)]
pub async fn create_blog(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Blog>>), ApiError> {
    check_len(
        &payload.title,
        3,
        200,
        "Title must be between 3 and 200 characters",
    )?;
    check_len(
        &payload.body,
        50,
        usize::MAX,
        "Body must be at least 50 characters",
    )?;
    if let Some(status) = &payload.status {
        check_status(status)?;
    }

    let blog = state.repo.create_blog(payload, admin.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Blog created successfully",
            blog,
        )),
    ))
}

/// update_blog
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = i64, Path, description = "Blog ID")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Updated", body = Blog),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_blog(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<ApiResponse<Blog>>, ApiError> {
    if let Some(status) = &payload.status {
        check_status(status)?;
    }

    let blog = state
        .repo
        .update_blog(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Blog"))?;
    Ok(Json(ApiResponse::ok_with_message(
        "Blog updated successfully",
        blog,
    )))
}

/// delete_blog
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_blog(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.repo.delete_blog(id).await? {
        return Err(ApiError::NotFound("Blog"));
    }
    Ok(Json(ApiResponse::message_only("Blog deleted successfully")))
}

// --- Enquiry Handlers ---

/// get_enquiries
///
/// [Admin Route] Customer enquiries are never publicly listable.
#[utoipa::path(
    get,
    path = "/api/enquiries",
    params(EnquiryFilter),
    responses((status = 200, description = "List enquiries", body = [Enquiry]))
)]
pub async fn get_enquiries(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Query(filter): Query<EnquiryFilter>,
) -> Result<Json<ListResponse<Enquiry>>, ApiError> {
    let (limit, offset) = page(filter.limit, filter.offset);
    let (enquiries, total) = state
        .repo
        .list_enquiries(filter.status, limit, offset)
        .await?;
    Ok(Json(ListResponse::new(enquiries, total, limit, offset)))
}

/// get_enquiry_by_id
#[utoipa::path(
    get,
    path = "/api/enquiries/{id}",
    params(("id" = i64, Path, description = "Enquiry ID")),
    responses(
        (status = 200, description = "Found", body = Enquiry),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_enquiry_by_id(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Enquiry>>, ApiError> {
    let enquiry = state
        .repo
        .get_enquiry(id)
        .await?
        .ok_or(ApiError::NotFound("Enquiry"))?;
    Ok(Json(ApiResponse::ok(enquiry)))
}

/// create_enquiry
///
/// [Public Route] Contact form submission — the only anonymous write in the system.
/// Status is stamped 'pending' server-side.
#[utoipa::path(
    post,
    path = "/api/enquiries",
    request_body = CreateEnquiryRequest,
    responses((status = 201, description = "Submitted", body = Enquiry))
)]
pub async fn create_enquiry(
    State(state): State<AppState>,
    Json(payload): Json<CreateEnquiryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Enquiry>>), ApiError> {
    check_len(
        &payload.name,
        2,
        100,
        "Name must be between 2 and 100 characters",
    )?;
    normalize_email(&payload.email)?;
    check_phone(&payload.phone)?;
    check_len(&payload.event_type, 1, usize::MAX, "Event type is required")?;
    if let Some(message) = &payload.message {
        check_len(message, 0, 1000, "Message must be max 1000 characters")?;
    }

    let enquiry = state.repo.create_enquiry(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Enquiry submitted successfully. We will contact you soon!",
            enquiry,
        )),
    ))
}

/// update_enquiry
///
/// [Admin Route] Status transition and follow-up notes only.
#[utoipa::path(
    put,
    path = "/api/enquiries/{id}",
    params(("id" = i64, Path, description = "Enquiry ID")),
    request_body = UpdateEnquiryRequest,
    responses(
        (status = 200, description = "Updated", body = Enquiry),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_enquiry(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEnquiryRequest>,
) -> Result<Json<ApiResponse<Enquiry>>, ApiError> {
    let enquiry = state
        .repo
        .update_enquiry(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Enquiry"))?;
    Ok(Json(ApiResponse::ok_with_message(
        "Enquiry updated successfully",
        enquiry,
    )))
}

/// delete_enquiry
#[utoipa::path(
    delete,
    path = "/api/enquiries/{id}",
    params(("id" = i64, Path, description = "Enquiry ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_enquiry(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.repo.delete_enquiry(id).await? {
        return Err(ApiError::NotFound("Enquiry"));
    }
    Ok(Json(ApiResponse::message_only(
        "Enquiry deleted successfully",
    )))
}

// --- Success Story Handlers ---

/// get_success_stories
///
/// [Public Route] Lists testimonials; the marketing site filters on `featured=true`
/// for the home page strip.
#[utoipa::path(
    get,
    path = "/api/success-stories",
    params(StoryFilter),
    responses((status = 200, description = "List stories", body = [SuccessStory]))
)]
pub async fn get_success_stories(
    State(state): State<AppState>,
    Query(filter): Query<StoryFilter>,
) -> Result<Json<ListResponse<SuccessStory>>, ApiError> {
    let (limit, offset) = page(filter.limit, filter.offset);
    let (stories, total) = state
        .repo
        .list_success_stories(filter.category, filter.featured, limit, offset)
        .await?;
    Ok(Json(ListResponse::new(stories, total, limit, offset)))
}

/// get_success_story_by_id
#[utoipa::path(
    get,
    path = "/api/success-stories/{id}",
    params(("id" = i64, Path, description = "Story ID")),
    responses(
        (status = 200, description = "Found", body = SuccessStory),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_success_story_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<SuccessStory>>, ApiError> {
    let story = state
        .repo
        .get_success_story(id)
        .await?
        .ok_or(ApiError::NotFound("Success story"))?;
    Ok(Json(ApiResponse::ok(story)))
}

/// create_success_story
#[utoipa::path(
    post,
    path = "/api/success-stories",
    request_body = CreateSuccessStoryRequest,
    responses((status = 201, description = "Created", body = SuccessStory))
)]
pub async fn create_success_story(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateSuccessStoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SuccessStory>>), ApiError> {
    check_len(
        &payload.event_name,
        3,
        200,
        "Event name must be between 3 and 200 characters",
    )?;
    check_len(
        &payload.client_name,
        2,
        100,
        "Client name must be between 2 and 100 characters",
    )?;
    check_len(
        &payload.client_quote,
        10,
        usize::MAX,
        "Client quote must be at least 10 characters",
    )?;
    if let Some(category) = &payload.category {
        check_category(category, STORY_CATEGORIES)?;
    }

    let story = state.repo.create_success_story(payload, admin.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Success story created successfully",
            story,
        )),
    ))
}

/// update_success_story
#[utoipa::path(
    put,
    path = "/api/success-stories/{id}",
    params(("id" = i64, Path, description = "Story ID")),
    request_body = UpdateSuccessStoryRequest,
    responses(
        (status = 200, description = "Updated", body = SuccessStory),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_success_story(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSuccessStoryRequest>,
) -> Result<Json<ApiResponse<SuccessStory>>, ApiError> {
    if let Some(category) = &payload.category {
        check_category(category, STORY_CATEGORIES)?;
    }

    let story = state
        .repo
        .update_success_story(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Success story"))?;
    Ok(Json(ApiResponse::ok_with_message(
        "Success story updated successfully",
        story,
    )))
}

/// delete_success_story
#[utoipa::path(
    delete,
    path = "/api/success-stories/{id}",
    params(("id" = i64, Path, description = "Story ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_success_story(
    AdminUser(_admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.repo.delete_success_story(id).await? {
        return Err(ApiError::NotFound("Success story"));
    }
    Ok(Json(ApiResponse::message_only(
        "Success story deleted successfully",
    )))
}

// --- Service Meta Handlers ---

/// health_check
///
/// [Public Route] Liveness probe for monitors and load balancers.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Royal STAR Event Management API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// root_index
///
/// [Public Route] Service banner with an index of the mounted endpoint groups.
pub async fn root_index() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Welcome to Royal STAR Event Management API",
        "version": "1.0.0",
        "endpoints": {
            "auth": "/api/auth",
            "events": "/api/events",
            "blogs": "/api/blogs",
            "enquiries": "/api/enquiries",
            "successStories": "/api/success-stories",
            "health": "/health"
        }
    }))
}
