use crate::models::{
    Admin, Blog, CreateBlogRequest, CreateEnquiryRequest, CreateEventRequest,
    CreateSuccessStoryRequest, Enquiry, Event, SuccessStory, UpdateBlogRequest,
    UpdateEnquiryRequest, UpdateEventRequest, UpdateSuccessStoryRequest,
};
use async_trait::async_trait;
use sqlx::{PgPool, query_builder::QueryBuilder};
use std::sync::Arc;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations, allowing the
/// handlers to interact with the data layer without knowing the specific
/// implementation (Postgres, Mock, etc.).
///
/// Every method returns `sqlx::Result` so the caller can distinguish "no such row"
/// (`Ok(None)` / `Ok(false)`) from "store unavailable" (`Err`). The auth gate relies
/// on that distinction to answer 401 for the former and 500 for the latter.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Admin Credential Store ---
    // Lookup is by lowercased email; the caller normalizes before calling.
    async fn find_admin_by_email(&self, email: &str) -> sqlx::Result<Option<Admin>>;
    async fn get_admin(&self, id: i64) -> sqlx::Result<Option<Admin>>;
    // Insert relies on the unique constraint on `email` to resolve races between
    // two concurrent registrations: one succeeds, one gets a unique violation.
    async fn create_admin(&self, email: &str, password_hash: &str, name: &str)
    -> sqlx::Result<Admin>;

    // --- Events ---
    async fn list_events(
        &self,
        category: Option<String>,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Event>, i64)>;
    async fn get_event(&self, id: i64) -> sqlx::Result<Option<Event>>;
    async fn create_event(&self, req: CreateEventRequest, created_by: i64)
    -> sqlx::Result<Event>;
    async fn update_event(&self, id: i64, req: UpdateEventRequest)
    -> sqlx::Result<Option<Event>>;
    async fn delete_event(&self, id: i64) -> sqlx::Result<bool>;

    // --- Blogs ---
    async fn list_blogs(
        &self,
        status: Option<String>,
        search: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Blog>, i64)>;
    async fn get_blog(&self, id: i64) -> sqlx::Result<Option<Blog>>;
    async fn create_blog(&self, req: CreateBlogRequest, created_by: i64) -> sqlx::Result<Blog>;
    async fn update_blog(&self, id: i64, req: UpdateBlogRequest) -> sqlx::Result<Option<Blog>>;
    async fn delete_blog(&self, id: i64) -> sqlx::Result<bool>;

    // --- Enquiries ---
    async fn list_enquiries(
        &self,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Enquiry>, i64)>;
    async fn get_enquiry(&self, id: i64) -> sqlx::Result<Option<Enquiry>>;
    // Public submission path; the repository stamps status 'pending'.
    async fn create_enquiry(&self, req: CreateEnquiryRequest) -> sqlx::Result<Enquiry>;
    async fn update_enquiry(
        &self,
        id: i64,
        req: UpdateEnquiryRequest,
    ) -> sqlx::Result<Option<Enquiry>>;
    async fn delete_enquiry(&self, id: i64) -> sqlx::Result<bool>;

    // --- Success Stories ---
    async fn list_success_stories(
        &self,
        category: Option<String>,
        featured: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<SuccessStory>, i64)>;
    async fn get_success_story(&self, id: i64) -> sqlx::Result<Option<SuccessStory>>;
    async fn create_success_story(
        &self,
        req: CreateSuccessStoryRequest,
        created_by: i64,
    ) -> sqlx::Result<SuccessStory>;
    async fn update_success_story(
        &self,
        id: i64,
        req: UpdateSuccessStoryRequest,
    ) -> sqlx::Result<Option<SuccessStory>>;
    async fn delete_success_story(&self, id: i64) -> sqlx::Result<bool>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by PostgreSQL.
/// All queries use the runtime API with bound parameters; filters are assembled
/// through `QueryBuilder` so user input never lands in the SQL text.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str =
    "id, title, description, images, event_date, category, tags, status, created_by, created_at, updated_at";
const BLOG_COLUMNS: &str =
    "id, title, body, image, meta_title, meta_description, meta_keywords, slug, status, created_by, created_at, updated_at";
const ENQUIRY_COLUMNS: &str =
    "id, name, email, phone, event_type, event_date, guest_count, budget, message, status, notes, created_at, updated_at";
const STORY_COLUMNS: &str =
    "id, event_name, client_name, client_quote, outcome, images, event_date, category, featured, created_by, created_at, updated_at";

#[async_trait]
impl Repository for PostgresRepository {
    // --- ADMINS ---

    async fn find_admin_by_email(&self, email: &str) -> sqlx::Result<Option<Admin>> {
        sqlx::query_as::<_, Admin>(
            "SELECT id, email, password_hash, name, created_at FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_admin(&self, id: i64) -> sqlx::Result<Option<Admin>> {
        sqlx::query_as::<_, Admin>(
            "SELECT id, email, password_hash, name, created_at FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_admin(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> sqlx::Result<Admin> {
        sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (email, password_hash, name, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, email, password_hash, name, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    // --- EVENTS ---

    /// list_events
    ///
    /// Filterable listing with a matching total count for the pagination envelope.
    async fn list_events(
        &self,
        category: Option<String>,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Event>, i64)> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM events WHERE TRUE", EVENT_COLUMNS));
        let mut count_builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM events WHERE TRUE");

        if let Some(c) = &category {
            builder.push(" AND category = ").push_bind(c.clone());
            count_builder.push(" AND category = ").push_bind(c.clone());
        }
        if let Some(s) = &status {
            builder.push(" AND status = ").push_bind(s.clone());
            count_builder.push(" AND status = ").push_bind(s.clone());
        }

        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let events = builder.build_query_as::<Event>().fetch_all(&self.pool).await?;
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok((events, total))
    }

    async fn get_event(&self, id: i64) -> sqlx::Result<Option<Event>> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {} FROM events WHERE id = $1",
            EVENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_event
    ///
    /// Missing optional fields take their documented defaults: empty image/tag lists
    /// and status 'published'.
    async fn create_event(
        &self,
        req: CreateEventRequest,
        created_by: i64,
    ) -> sqlx::Result<Event> {
        sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (title, description, images, event_date, category, tags, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(req.title)
        .bind(req.description)
        .bind(req.images.unwrap_or_default())
        .bind(req.event_date)
        .bind(req.category)
        .bind(req.tags.unwrap_or_default())
        .bind(req.status.unwrap_or_else(|| "published".to_string()))
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    /// update_event
    ///
    /// Partial update via COALESCE: only the columns whose request field is `Some`
    /// change. Returns `None` when no row matched the id.
    async fn update_event(
        &self,
        id: i64,
        req: UpdateEventRequest,
    ) -> sqlx::Result<Option<Event>> {
        sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                images = COALESCE($4, images),
                event_date = COALESCE($5, event_date),
                category = COALESCE($6, category),
                tags = COALESCE($7, tags),
                status = COALESCE($8, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.images)
        .bind(req.event_date)
        .bind(req.category)
        .bind(req.tags)
        .bind(req.status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_event(&self, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- BLOGS ---

    /// list_blogs
    ///
    /// `search` does a case-insensitive match across title and body.
    async fn list_blogs(
        &self,
        status: Option<String>,
        search: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Blog>, i64)> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM blogs WHERE TRUE", BLOG_COLUMNS));
        let mut count_builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM blogs WHERE TRUE");

        if let Some(s) = &status {
            builder.push(" AND status = ").push_bind(s.clone());
            count_builder.push(" AND status = ").push_bind(s.clone());
        }
        if let Some(q) = &search {
            let pattern = format!("%{}%", q);
            builder.push(" AND (title ILIKE ").push_bind(pattern.clone());
            builder.push(" OR body ILIKE ").push_bind(pattern.clone());
            builder.push(")");
            count_builder
                .push(" AND (title ILIKE ")
                .push_bind(pattern.clone());
            count_builder.push(" OR body ILIKE ").push_bind(pattern);
            count_builder.push(")");
        }

        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let blogs = builder.build_query_as::<Blog>().fetch_all(&self.pool).await?;
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok((blogs, total))
    }

    async fn get_blog(&self, id: i64) -> sqlx::Result<Option<Blog>> {
        sqlx::query_as::<_, Blog>(&format!("SELECT {} FROM blogs WHERE id = $1", BLOG_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// create_blog
    ///
    /// SEO defaults are derived here when the dashboard omits them: meta_title from
    /// the title, meta_description from the leading 160 characters of the body, and
    /// the slug from the lowercased title.
    async fn create_blog(&self, req: CreateBlogRequest, created_by: i64) -> sqlx::Result<Blog> {
        let meta_title = req.meta_title.unwrap_or_else(|| req.title.clone());
        let meta_description = req
            .meta_description
            .unwrap_or_else(|| req.body.chars().take(160).collect());
        let slug = req.slug.unwrap_or_else(|| slugify(&req.title));

        sqlx::query_as::<_, Blog>(&format!(
            r#"
            INSERT INTO blogs (title, body, image, meta_title, meta_description, meta_keywords, slug, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING {}
            "#,
            BLOG_COLUMNS
        ))
        .bind(req.title)
        .bind(req.body)
        .bind(req.image)
        .bind(meta_title)
        .bind(meta_description)
        .bind(req.meta_keywords.unwrap_or_default())
        .bind(slug)
        .bind(req.status.unwrap_or_else(|| "draft".to_string()))
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_blog(&self, id: i64, req: UpdateBlogRequest) -> sqlx::Result<Option<Blog>> {
        sqlx::query_as::<_, Blog>(&format!(
            r#"
            UPDATE blogs
            SET title = COALESCE($2, title),
                body = COALESCE($3, body),
                image = COALESCE($4, image),
                meta_title = COALESCE($5, meta_title),
                meta_description = COALESCE($6, meta_description),
                meta_keywords = COALESCE($7, meta_keywords),
                slug = COALESCE($8, slug),
                status = COALESCE($9, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            BLOG_COLUMNS
        ))
        .bind(id)
        .bind(req.title)
        .bind(req.body)
        .bind(req.image)
        .bind(req.meta_title)
        .bind(req.meta_description)
        .bind(req.meta_keywords)
        .bind(req.slug)
        .bind(req.status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_blog(&self, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- ENQUIRIES ---

    async fn list_enquiries(
        &self,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Enquiry>, i64)> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM enquiries WHERE TRUE",
            ENQUIRY_COLUMNS
        ));
        let mut count_builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM enquiries WHERE TRUE");

        if let Some(s) = &status {
            builder.push(" AND status = ").push_bind(s.clone());
            count_builder.push(" AND status = ").push_bind(s.clone());
        }

        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let enquiries = builder
            .build_query_as::<Enquiry>()
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok((enquiries, total))
    }

    async fn get_enquiry(&self, id: i64) -> sqlx::Result<Option<Enquiry>> {
        sqlx::query_as::<_, Enquiry>(&format!(
            "SELECT {} FROM enquiries WHERE id = $1",
            ENQUIRY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_enquiry
    ///
    /// The public contact-form write. Status is always stamped 'pending' server-side;
    /// the form cannot choose it.
    async fn create_enquiry(&self, req: CreateEnquiryRequest) -> sqlx::Result<Enquiry> {
        sqlx::query_as::<_, Enquiry>(&format!(
            r#"
            INSERT INTO enquiries (name, email, phone, event_type, event_date, guest_count, budget, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', NOW(), NOW())
            RETURNING {}
            "#,
            ENQUIRY_COLUMNS
        ))
        .bind(req.name)
        .bind(req.email)
        .bind(req.phone)
        .bind(req.event_type)
        .bind(req.event_date)
        .bind(req.guest_count)
        .bind(req.budget)
        .bind(req.message)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_enquiry(
        &self,
        id: i64,
        req: UpdateEnquiryRequest,
    ) -> sqlx::Result<Option<Enquiry>> {
        sqlx::query_as::<_, Enquiry>(&format!(
            r#"
            UPDATE enquiries
            SET status = COALESCE($2, status),
                notes = COALESCE($3, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ENQUIRY_COLUMNS
        ))
        .bind(id)
        .bind(req.status)
        .bind(req.notes)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_enquiry(&self, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- SUCCESS STORIES ---

    async fn list_success_stories(
        &self,
        category: Option<String>,
        featured: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<SuccessStory>, i64)> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM success_stories WHERE TRUE",
            STORY_COLUMNS
        ));
        let mut count_builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM success_stories WHERE TRUE");

        if let Some(c) = &category {
            builder.push(" AND category = ").push_bind(c.clone());
            count_builder.push(" AND category = ").push_bind(c.clone());
        }
        if let Some(f) = featured {
            builder.push(" AND featured = ").push_bind(f);
            count_builder.push(" AND featured = ").push_bind(f);
        }

        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let stories = builder
            .build_query_as::<SuccessStory>()
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok((stories, total))
    }

    async fn get_success_story(&self, id: i64) -> sqlx::Result<Option<SuccessStory>> {
        sqlx::query_as::<_, SuccessStory>(&format!(
            "SELECT {} FROM success_stories WHERE id = $1",
            STORY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_success_story(
        &self,
        req: CreateSuccessStoryRequest,
        created_by: i64,
    ) -> sqlx::Result<SuccessStory> {
        sqlx::query_as::<_, SuccessStory>(&format!(
            r#"
            INSERT INTO success_stories (event_name, client_name, client_quote, outcome, images, event_date, category, featured, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING {}
            "#,
            STORY_COLUMNS
        ))
        .bind(req.event_name)
        .bind(req.client_name)
        .bind(req.client_quote)
        .bind(req.outcome)
        .bind(req.images.unwrap_or_default())
        .bind(req.event_date)
        .bind(req.category.unwrap_or_else(|| "wedding".to_string()))
        .bind(req.featured.unwrap_or(false))
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_success_story(
        &self,
        id: i64,
        req: UpdateSuccessStoryRequest,
    ) -> sqlx::Result<Option<SuccessStory>> {
        sqlx::query_as::<_, SuccessStory>(&format!(
            r#"
            UPDATE success_stories
            SET event_name = COALESCE($2, event_name),
                client_name = COALESCE($3, client_name),
                client_quote = COALESCE($4, client_quote),
                outcome = COALESCE($5, outcome),
                images = COALESCE($6, images),
                event_date = COALESCE($7, event_date),
                category = COALESCE($8, category),
                featured = COALESCE($9, featured),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            STORY_COLUMNS
        ))
        .bind(id)
        .bind(req.event_name)
        .bind(req.client_name)
        .bind(req.client_quote)
        .bind(req.outcome)
        .bind(req.images)
        .bind(req.event_date)
        .bind(req.category)
        .bind(req.featured)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_success_story(&self, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM success_stories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// slugify
///
/// Lowercases and collapses every non-alphanumeric run into a single hyphen,
/// matching the slug the dashboard shows in blog URLs.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
