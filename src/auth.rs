use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::AppConfig, error::ApiError, models::Admin};

/// Role
///
/// The role claim carried inside every session token. The system issues exactly one
/// role today ("admin"), but the claim is decoded as a closed enum rather than a raw
/// string: any other value a signed token might carry lands on `Unknown`, which keeps
/// the token *authenticated* (the signature is fine) while the admin guard refuses to
/// *authorize* it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS, utoipa::ToSchema)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(other)]
    Unknown,
}

/// Claims
///
/// The payload structure of a session JWT. All fields are mandatory; a token missing
/// or mistyping any of them fails decoding and is rejected as invalid, it is never
/// partially trusted.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The administrator's primary key in the `admins` table.
    pub id: i64,
    /// The administrator's email at issuance time.
    pub email: String,
    /// Role claim, fixed to `admin` at issuance.
    pub role: Role,
    /// Issued At (iat): timestamp when the JWT was created.
    pub iat: usize,
    /// Expiration Time (exp): timestamp after which the JWT must not be accepted.
    pub exp: usize,
}

/// issue_token
///
/// Produces a signed session token for an administrator. Logically pure given the
/// secret and the current clock: no state is recorded anywhere, the token is the
/// whole session. The expiry is a configured lifetime from *now*, so rotating the
/// signing secret retires every outstanding token within that window.
///
/// The token is signed, not encrypted; any holder can read the claims, so nothing
/// in them is treated as secret material.
pub fn issue_token(admin: &Admin, config: &AppConfig) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        id: admin.id,
        email: admin.email.clone(),
        role: Role::Admin,
        iat: now.timestamp() as usize,
        exp: (now + Duration::days(config.jwt_expire_days)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("token signing failed: {:?}", e);
        ApiError::Internal
    })
}

/// decode_token
///
/// Validates a presented token's signature and expiry against the configured secret
/// and returns the decoded claims. Pure and synchronous: a function of (token,
/// secret, current time) only, with zero clock leeway so expiry is exact.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

/// hash_password
///
/// Derives a salted bcrypt hash for a new credential. The salt is random per record
/// and the cost factor adaptive, so equal passwords never share a hash and brute
/// force stays expensive as hardware improves. Call sites on the async path must
/// run this inside `spawn_blocking`.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {:?}", e);
        ApiError::Internal
    })
}

/// verify_password
///
/// Compares a plaintext candidate against a stored bcrypt hash without ever
/// reconstructing the plaintext. Fails closed: a malformed hash or any internal
/// bcrypt error reports non-match, never detail on which side mismatched.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plain, stored_hash).unwrap_or(false)
}

/// AuthUser — the plain-auth route guard.
///
/// The resolved identity of an authenticated request, extracted from a validated
/// Bearer token. The state machine over a single request:
///
/// - no/misshapen Authorization header -> 401 (missing-token message), terminal
/// - bad signature, malformed claims, or expired -> 401 (one generic message), terminal
/// - valid -> claims attached, handler runs
///
/// Verification never touches the database and never blocks; a token is valid purely
/// by signature and expiry. There is no role check here — this guard fronts
/// read-your-own-profile, where authentication alone suffices.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    // Allows the extractor to pull the AppConfig (for the JWT secret).
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        // Token Extraction
        // Retrieve the Authorization header and ensure it carries the "Bearer " scheme.
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::MissingToken)?;

        // Decode and validate. Expired, tampered, and malformed tokens all collapse
        // into the same rejection so a probing client learns nothing about the cause.
        let claims =
            decode_token(token, &config.jwt_secret).map_err(|_| ApiError::InvalidToken)?;

        Ok(AuthUser {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// AdminUser — the admin route guard.
///
/// Extends the plain guard with a role check: a validly signed, unexpired token whose
/// role is anything other than `admin` is rejected with 403. Every mutation route in
/// the application sits behind this guard.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if user.role != Role::Admin {
            return Err(ApiError::Forbidden);
        }

        Ok(AdminUser(user))
    }
}
