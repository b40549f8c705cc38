//! Integration tests for the token guards (`AuthUser` / `AdminUser`).
//!
//! The guards are exercised directly as extractors against constructed request
//! parts, which pins down the exact rejection (status AND body) for every way a
//! request can fail authentication, without standing up a server.

mod common;

use axum::{
    body::to_bytes,
    http::{Request, StatusCode, header, request::Parts},
    response::IntoResponse,
};
use common::{MockRepo, TEST_JWT_SECRET, mint_token, test_state};
use royalstar_portal::{
    AppState,
    auth::{AdminUser, AuthUser, Role},
    error::ApiError,
};
use serde_json::Value;

fn parts_with_header(value: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/auth/profile");
    if let Some(value) = value {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(()).unwrap().into_parts().0
}

async fn rejection_body(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn state() -> AppState {
    test_state(MockRepo::default())
}

async fn extract_auth(parts: &mut Parts, state: &AppState) -> Result<AuthUser, ApiError> {
    use axum::extract::FromRequestParts;
    AuthUser::from_request_parts(parts, state).await
}

async fn extract_admin(parts: &mut Parts, state: &AppState) -> Result<AdminUser, ApiError> {
    use axum::extract::FromRequestParts;
    AdminUser::from_request_parts(parts, state).await
}

#[tokio::test]
async fn valid_token_is_admitted_with_claims_attached() {
    let state = state();
    let token = mint_token(7, "admin@x.com", "admin", 3600, TEST_JWT_SECRET);
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let user = extract_auth(&mut parts, &state).await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.email, "admin@x.com");
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn missing_header_yields_401_missing_token() {
    let state = state();
    let mut parts = parts_with_header(None);

    let err = extract_auth(&mut parts, &state).await.unwrap_err();
    let (status, body) = rejection_body(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access denied. No token provided.");
}

#[tokio::test]
async fn non_bearer_scheme_yields_401_missing_token() {
    let state = state();
    let token = mint_token(7, "admin@x.com", "admin", 3600, TEST_JWT_SECRET);
    // Right token, wrong scheme.
    let mut parts = parts_with_header(Some(&format!("Token {token}")));

    let err = extract_auth(&mut parts, &state).await.unwrap_err();
    let (status, body) = rejection_body(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Access denied. No token provided.");
}

#[tokio::test]
async fn expired_token_yields_401_invalid_token() {
    let state = state();
    let token = mint_token(7, "admin@x.com", "admin", -120, TEST_JWT_SECRET);
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let err = extract_auth(&mut parts, &state).await.unwrap_err();
    let (status, body) = rejection_body(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn tampered_token_yields_the_same_rejection_as_expired() {
    let state = state();
    let token = mint_token(7, "admin@x.com", "admin", 3600, TEST_JWT_SECRET);

    // Flip one character in the claims segment; the signature no longer matches.
    let mut chars: Vec<char> = token.chars().collect();
    let mid = token.find('.').unwrap() + 2;
    chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    let mut parts = parts_with_header(Some(&format!("Bearer {tampered}")));
    let err = extract_auth(&mut parts, &state).await.unwrap_err();
    let (status, body) = rejection_body(err).await;

    // A probing client cannot distinguish tampering from expiry.
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn token_signed_with_wrong_secret_is_rejected() {
    let state = state();
    let token = mint_token(7, "admin@x.com", "admin", 3600, "some-other-secret");
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let err = extract_auth(&mut parts, &state).await.unwrap_err();
    let (status, body) = rejection_body(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn admin_guard_admits_admin_role() {
    let state = state();
    let token = mint_token(7, "admin@x.com", "admin", 3600, TEST_JWT_SECRET);
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let AdminUser(user) = extract_admin(&mut parts, &state).await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn admin_guard_refuses_validly_signed_foreign_role() {
    let state = state();
    // Signed with OUR secret but carrying a role the system never issues. The
    // holder is authenticated, not authorized: 403, not 401.
    let token = mint_token(9, "editor@x.com", "editor", 3600, TEST_JWT_SECRET);
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let err = extract_admin(&mut parts, &state).await.unwrap_err();
    let (status, body) = rejection_body(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access denied. Admin privileges required.");
}

#[tokio::test]
async fn plain_guard_admits_foreign_role() {
    let state = state();
    // The plain guard checks authentication only; the same token the admin guard
    // refuses passes here with its role preserved.
    let token = mint_token(9, "editor@x.com", "editor", 3600, TEST_JWT_SECRET);
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let user = extract_auth(&mut parts, &state).await.unwrap();
    assert_eq!(user.role, Role::Unknown);
}
