//! Request extractors.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use workbridge_db::entities::{user, workspace_agent};

/// Authenticated user extractor.
#[derive(Debug, Clone)]
pub struct AuthUser(pub user::Model);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get user from request extensions (set by auth middleware)
        parts
            .extensions
            .get::<user::Model>()
            .cloned()
            .map(AuthUser)
            .ok_or((StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}

/// Authenticated workspace agent extractor.
///
/// A separate principal type from [`AuthUser`]: handlers taking this
/// extractor can never be reached with a user session, and vice versa.
#[derive(Debug, Clone)]
pub struct AuthAgent(pub workspace_agent::Model);

impl<S> FromRequestParts<S> for AuthAgent
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<workspace_agent::Model>()
            .cloned()
            .map(AuthAgent)
            .ok_or((StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}
