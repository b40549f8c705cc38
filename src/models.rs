use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::auth::Role;

// --- Core Application Schemas (Mapped to Database) ---

/// Admin
///
/// The administrator's canonical credential record from the `admins` table. Internal
/// to the gate: the password hash never leaves the repository layer in a response,
/// so this struct is deliberately excluded from the API schema components and the
/// exported TypeScript types. Handlers project it into `AuthenticatedUser` or
/// `AdminProfile` before anything is serialized.
#[derive(Debug, Clone, FromRow, Default)]
pub struct Admin {
    pub id: i64,
    // Stored lowercased; uniqueness enforced by the database.
    pub email: String,
    // Salted bcrypt hash. Never serialized, never logged.
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Event
///
/// A portfolio/event record from the `events` table. Public listings filter on
/// `status`; mutations are admin-gated.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    // Image URLs (or data URIs) managed by the dashboard.
    pub images: Vec<String>,
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,
    // One of EVENT_CATEGORIES.
    pub category: String,
    pub tags: Vec<String>,
    // 'draft' or 'published'. New events default to 'published'.
    pub status: String,
    // FK to admins.id.
    pub created_by: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Blog
///
/// A blog post from the `blogs` table, carrying its own SEO metadata. The slug and
/// the meta fields are derived from the title/body at creation when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub image: Option<String>,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: Vec<String>,
    pub slug: String,
    // 'draft' or 'published'. New blogs default to 'draft'.
    pub status: String,
    pub created_by: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Enquiry
///
/// A customer enquiry from the public contact form (`enquiries` table). Created
/// anonymously with status 'pending'; read and managed only by admins.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub budget: Option<String>,
    pub message: Option<String>,
    pub status: String,
    // Internal follow-up notes set by admins.
    pub notes: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// SuccessStory
///
/// A testimonial record from the `success_stories` table, shown on the marketing
/// site. `featured` stories are surfaced on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct SuccessStory {
    pub id: i64,
    pub event_name: String,
    pub client_name: String,
    pub client_quote: String,
    pub outcome: Option<String>,
    pub images: Vec<String>,
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,
    pub category: String,
    pub featured: bool,
    pub created_by: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Category / Status Vocabularies ---

pub const EVENT_CATEGORIES: &[&str] = &[
    "wedding",
    "corporate",
    "cultural",
    "birthday",
    "other",
    "portfolio",
];
pub const STORY_CATEGORIES: &[&str] = &["wedding", "corporate", "cultural", "birthday", "other"];
pub const CONTENT_STATUSES: &[&str] = &["draft", "published"];

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for POST /api/auth/login. The password only ever flows into the
/// bcrypt comparison; it is never persisted or logged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// RegisterRequest
///
/// Input payload for the admin-gated provisioning endpoint (POST /api/auth/register).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// CreateEventRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub images: Option<Vec<String>>,
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,
    pub category: String,
    pub tags: Option<Vec<String>>,
    /// Defaults to 'published' when omitted.
    pub status: Option<String>,
}

/// UpdateEventRequest
///
/// Partial update payload: only fields present in the JSON are written, via
/// `COALESCE` in the repository query.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// CreateBlogRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateBlogRequest {
    pub title: String,
    pub body: String,
    pub image: Option<String>,
    /// Defaults to the title when omitted.
    pub meta_title: Option<String>,
    /// Defaults to the first 160 characters of the body when omitted.
    pub meta_description: Option<String>,
    pub meta_keywords: Option<Vec<String>>,
    /// Defaults to a slugified title when omitted.
    pub slug: Option<String>,
    /// Defaults to 'draft' when omitted.
    pub status: Option<String>,
}

/// UpdateBlogRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateBlogRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// CreateEnquiryRequest
///
/// The one public write payload in the system (contact form submission).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateEnquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,
    pub guest_count: Option<i32>,
    pub budget: Option<String>,
    pub message: Option<String>,
}

/// UpdateEnquiryRequest
///
/// Admin follow-up: status transitions and internal notes only.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateEnquiryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// CreateSuccessStoryRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateSuccessStoryRequest {
    pub event_name: String,
    pub client_name: String,
    pub client_quote: String,
    pub outcome: Option<String>,
    pub images: Option<Vec<String>>,
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,
    /// Defaults to 'wedding' when omitted.
    pub category: Option<String>,
    /// Defaults to false when omitted.
    pub featured: Option<bool>,
}

/// UpdateSuccessStoryRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateSuccessStoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_quote: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub event_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

// --- Response Schemas (Output) ---

/// AuthenticatedUser
///
/// The sanitized user projection returned by login and registration: identity plus
/// role claim, never the hash.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&Admin> for AuthenticatedUser {
    fn from(admin: &Admin) -> Self {
        AuthenticatedUser {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
            role: Role::Admin,
        }
    }
}

/// AuthData
///
/// The `data` payload of a successful login/registration: the bearer token plus the
/// sanitized user projection.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AuthData {
    pub token: String,
    pub user: AuthenticatedUser,
}

/// AdminProfile
///
/// Output schema for GET /api/auth/profile: the caller's own sanitized record.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AdminProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        AdminProfile {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
            created_at: admin.created_at,
        }
    }
}

/// Pagination
///
/// Echoed back on every list response so the dashboard can page through results.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct Pagination {
    /// Total matching rows, ignoring limit/offset.
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// ApiResponse
///
/// The uniform single-record envelope: `{ success, message?, data? }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(message: &str, data: T) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message_only(message: &str) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

/// ListResponse
///
/// The uniform collection envelope: `{ success, data: [...], pagination }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        ListResponse {
            success: true,
            data,
            pagination: Pagination {
                total,
                limit,
                offset,
            },
        }
    }
}
