#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use royalstar_portal::{
    AppState,
    config::AppConfig,
    models::{
        Admin, Blog, CreateBlogRequest, CreateEnquiryRequest, CreateEventRequest,
        CreateSuccessStoryRequest, Enquiry, Event, SuccessStory, UpdateBlogRequest,
        UpdateEnquiryRequest, UpdateEventRequest, UpdateSuccessStoryRequest,
    },
    repository::Repository,
};
use serde::Serialize;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

pub const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";

/// Mint a token with arbitrary claim values, bypassing the issuer, so tests can
/// produce expired tokens and foreign role values the real issuer never emits.
pub fn mint_token(id: i64, email: &str, role: &str, exp_offset_secs: i64, secret: &str) -> String {
    #[derive(Serialize)]
    struct RawClaims {
        id: i64,
        email: String,
        role: String,
        iat: usize,
        exp: usize,
    }

    let now = Utc::now().timestamp();
    let claims = RawClaims {
        id,
        email: email.to_string(),
        role: role.to_string(),
        iat: now as usize,
        exp: (now + exp_offset_secs) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Build an AppState around a mock repository, pinned to the test secret.
pub fn test_state(repo: MockRepo) -> AppState {
    test_state_shared(Arc::new(repo))
}

/// Like `test_state`, but the caller keeps a handle on the mock so its
/// collections can be inspected after handlers run.
pub fn test_state_shared(repo: Arc<MockRepo>) -> AppState {
    let config = AppConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        ..AppConfig::default()
    };
    AppState { repo, config }
}

/// A bcrypt hash at minimal cost; verification is cost-agnostic, and the low cost
/// keeps the test suite fast.
pub fn cheap_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

// --- In-Memory Mock Repository ---

/// MockRepo
///
/// An in-memory stand-in for the Postgres repository. Collections live behind
/// Mutexes; ids are handed out from per-collection counters. Setting `fail_all`
/// makes every method report a store failure so tests can check the
/// 500-versus-401 distinction.
#[derive(Default)]
pub struct MockRepo {
    pub fail_all: bool,

    pub admins: Mutex<Vec<Admin>>,
    pub events: Mutex<Vec<Event>>,
    pub blogs: Mutex<Vec<Blog>>,
    pub enquiries: Mutex<Vec<Enquiry>>,
    pub stories: Mutex<Vec<SuccessStory>>,

    next_admin_id: AtomicI64,
    next_event_id: AtomicI64,
    next_blog_id: AtomicI64,
    next_enquiry_id: AtomicI64,
    next_story_id: AtomicI64,
}

impl MockRepo {
    pub fn unavailable() -> Self {
        MockRepo {
            fail_all: true,
            ..MockRepo::default()
        }
    }

    pub fn with_admin(self, id: i64, email: &str, name: &str, password_hash: &str) -> Self {
        self.admins.lock().unwrap().push(Admin {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        });
        self.next_admin_id.store(id, Ordering::SeqCst);
        self
    }

    fn check(&self) -> sqlx::Result<()> {
        if self.fail_all {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    fn next(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn window<T: Clone>(items: Vec<T>, limit: i64, offset: i64) -> (Vec<T>, i64) {
        let total = items.len() as i64;
        let page = items
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();
        (page, total)
    }
}

#[async_trait]
impl Repository for MockRepo {
    // --- Admins ---

    async fn find_admin_by_email(&self, email: &str) -> sqlx::Result<Option<Admin>> {
        self.check()?;
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn get_admin(&self, id: i64) -> sqlx::Result<Option<Admin>> {
        self.check()?;
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create_admin(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> sqlx::Result<Admin> {
        self.check()?;
        let admin = Admin {
            id: Self::next(&self.next_admin_id),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.admins.lock().unwrap().push(admin.clone());
        Ok(admin)
    }

    // --- Events ---

    async fn list_events(
        &self,
        category: Option<String>,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Event>, i64)> {
        self.check()?;
        let items: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| category.as_ref().is_none_or(|c| &e.category == c))
            .filter(|e| status.as_ref().is_none_or(|s| &e.status == s))
            .cloned()
            .collect();
        Ok(Self::window(items, limit, offset))
    }

    async fn get_event(&self, id: i64) -> sqlx::Result<Option<Event>> {
        self.check()?;
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create_event(
        &self,
        req: CreateEventRequest,
        created_by: i64,
    ) -> sqlx::Result<Event> {
        self.check()?;
        let now = Utc::now();
        let event = Event {
            id: Self::next(&self.next_event_id),
            title: req.title,
            description: req.description,
            images: req.images.unwrap_or_default(),
            event_date: req.event_date,
            category: req.category,
            tags: req.tags.unwrap_or_default(),
            status: req.status.unwrap_or_else(|| "published".to_string()),
            created_by,
            created_at: now,
            updated_at: now,
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update_event(
        &self,
        id: i64,
        req: UpdateEventRequest,
    ) -> sqlx::Result<Option<Event>> {
        self.check()?;
        let mut events = self.events.lock().unwrap();
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        if let Some(v) = req.title {
            event.title = v;
        }
        if let Some(v) = req.description {
            event.description = v;
        }
        if let Some(v) = req.images {
            event.images = v;
        }
        if let Some(v) = req.event_date {
            event.event_date = Some(v);
        }
        if let Some(v) = req.category {
            event.category = v;
        }
        if let Some(v) = req.tags {
            event.tags = v;
        }
        if let Some(v) = req.status {
            event.status = v;
        }
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete_event(&self, id: i64) -> sqlx::Result<bool> {
        self.check()?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() < before)
    }

    // --- Blogs ---

    async fn list_blogs(
        &self,
        status: Option<String>,
        search: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Blog>, i64)> {
        self.check()?;
        let needle = search.map(|s| s.to_lowercase());
        let items: Vec<Blog> = self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| status.as_ref().is_none_or(|s| &b.status == s))
            .filter(|b| {
                needle.as_ref().is_none_or(|q| {
                    b.title.to_lowercase().contains(q) || b.body.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();
        Ok(Self::window(items, limit, offset))
    }

    async fn get_blog(&self, id: i64) -> sqlx::Result<Option<Blog>> {
        self.check()?;
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create_blog(&self, req: CreateBlogRequest, created_by: i64) -> sqlx::Result<Blog> {
        self.check()?;
        let now = Utc::now();
        let blog = Blog {
            id: Self::next(&self.next_blog_id),
            meta_title: req.meta_title.unwrap_or_else(|| req.title.clone()),
            meta_description: req
                .meta_description
                .unwrap_or_else(|| req.body.chars().take(160).collect()),
            slug: req
                .slug
                .unwrap_or_else(|| royalstar_portal::repository::slugify(&req.title)),
            title: req.title,
            body: req.body,
            image: req.image,
            meta_keywords: req.meta_keywords.unwrap_or_default(),
            status: req.status.unwrap_or_else(|| "draft".to_string()),
            created_by,
            created_at: now,
            updated_at: now,
        };
        self.blogs.lock().unwrap().push(blog.clone());
        Ok(blog)
    }

    async fn update_blog(&self, id: i64, req: UpdateBlogRequest) -> sqlx::Result<Option<Blog>> {
        self.check()?;
        let mut blogs = self.blogs.lock().unwrap();
        let Some(blog) = blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        if let Some(v) = req.title {
            blog.title = v;
        }
        if let Some(v) = req.body {
            blog.body = v;
        }
        if let Some(v) = req.image {
            blog.image = Some(v);
        }
        if let Some(v) = req.meta_title {
            blog.meta_title = v;
        }
        if let Some(v) = req.meta_description {
            blog.meta_description = v;
        }
        if let Some(v) = req.meta_keywords {
            blog.meta_keywords = v;
        }
        if let Some(v) = req.slug {
            blog.slug = v;
        }
        if let Some(v) = req.status {
            blog.status = v;
        }
        blog.updated_at = Utc::now();
        Ok(Some(blog.clone()))
    }

    async fn delete_blog(&self, id: i64) -> sqlx::Result<bool> {
        self.check()?;
        let mut blogs = self.blogs.lock().unwrap();
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        Ok(blogs.len() < before)
    }

    // --- Enquiries ---

    async fn list_enquiries(
        &self,
        status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<Enquiry>, i64)> {
        self.check()?;
        let items: Vec<Enquiry> = self
            .enquiries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| status.as_ref().is_none_or(|s| &e.status == s))
            .cloned()
            .collect();
        Ok(Self::window(items, limit, offset))
    }

    async fn get_enquiry(&self, id: i64) -> sqlx::Result<Option<Enquiry>> {
        self.check()?;
        Ok(self
            .enquiries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create_enquiry(&self, req: CreateEnquiryRequest) -> sqlx::Result<Enquiry> {
        self.check()?;
        let now = Utc::now();
        let enquiry = Enquiry {
            id: Self::next(&self.next_enquiry_id),
            name: req.name,
            email: req.email,
            phone: req.phone,
            event_type: req.event_type,
            event_date: req.event_date,
            guest_count: req.guest_count,
            budget: req.budget,
            message: req.message,
            status: "pending".to_string(),
            notes: None,
            created_at: now,
            updated_at: now,
        };
        self.enquiries.lock().unwrap().push(enquiry.clone());
        Ok(enquiry)
    }

    async fn update_enquiry(
        &self,
        id: i64,
        req: UpdateEnquiryRequest,
    ) -> sqlx::Result<Option<Enquiry>> {
        self.check()?;
        let mut enquiries = self.enquiries.lock().unwrap();
        let Some(enquiry) = enquiries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        if let Some(v) = req.status {
            enquiry.status = v;
        }
        if let Some(v) = req.notes {
            enquiry.notes = Some(v);
        }
        enquiry.updated_at = Utc::now();
        Ok(Some(enquiry.clone()))
    }

    async fn delete_enquiry(&self, id: i64) -> sqlx::Result<bool> {
        self.check()?;
        let mut enquiries = self.enquiries.lock().unwrap();
        let before = enquiries.len();
        enquiries.retain(|e| e.id != id);
        Ok(enquiries.len() < before)
    }

    // --- Success Stories ---

    async fn list_success_stories(
        &self,
        category: Option<String>,
        featured: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<(Vec<SuccessStory>, i64)> {
        self.check()?;
        let items: Vec<SuccessStory> = self
            .stories
            .lock()
            .unwrap()
            .iter()
            .filter(|s| category.as_ref().is_none_or(|c| &s.category == c))
            .filter(|s| featured.is_none_or(|f| s.featured == f))
            .cloned()
            .collect();
        Ok(Self::window(items, limit, offset))
    }

    async fn get_success_story(&self, id: i64) -> sqlx::Result<Option<SuccessStory>> {
        self.check()?;
        Ok(self
            .stories
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create_success_story(
        &self,
        req: CreateSuccessStoryRequest,
        created_by: i64,
    ) -> sqlx::Result<SuccessStory> {
        self.check()?;
        let now = Utc::now();
        let story = SuccessStory {
            id: Self::next(&self.next_story_id),
            event_name: req.event_name,
            client_name: req.client_name,
            client_quote: req.client_quote,
            outcome: req.outcome,
            images: req.images.unwrap_or_default(),
            event_date: req.event_date,
            category: req.category.unwrap_or_else(|| "wedding".to_string()),
            featured: req.featured.unwrap_or(false),
            created_by,
            created_at: now,
            updated_at: now,
        };
        self.stories.lock().unwrap().push(story.clone());
        Ok(story)
    }

    async fn update_success_story(
        &self,
        id: i64,
        req: UpdateSuccessStoryRequest,
    ) -> sqlx::Result<Option<SuccessStory>> {
        self.check()?;
        let mut stories = self.stories.lock().unwrap();
        let Some(story) = stories.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(v) = req.event_name {
            story.event_name = v;
        }
        if let Some(v) = req.client_name {
            story.client_name = v;
        }
        if let Some(v) = req.client_quote {
            story.client_quote = v;
        }
        if let Some(v) = req.outcome {
            story.outcome = Some(v);
        }
        if let Some(v) = req.images {
            story.images = v;
        }
        if let Some(v) = req.event_date {
            story.event_date = Some(v);
        }
        if let Some(v) = req.category {
            story.category = v;
        }
        if let Some(v) = req.featured {
            story.featured = v;
        }
        story.updated_at = Utc::now();
        Ok(Some(story.clone()))
    }

    async fn delete_success_story(&self, id: i64) -> sqlx::Result<bool> {
        self.check()?;
        let mut stories = self.stories.lock().unwrap();
        let before = stories.len();
        stories.retain(|s| s.id != id);
        Ok(stories.len() < before)
    }
}
