//! Git SSH key endpoints.

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use workbridge_common::AppResult;
use workbridge_core::{Actor, AgentGitSshKeyResponse, GitSshKeyResponse};
use workbridge_db::entities::user;

use crate::{
    extractors::{AuthAgent, AuthUser},
    middleware::AppState,
    response::ApiResponse,
};

/// Resolve the `{user}` path parameter, allowing the literal `me`.
///
/// Unknown target users are a 404 before any key lookup happens.
async fn resolve_target_user(
    state: &AppState,
    caller: &user::Model,
    param: &str,
) -> AppResult<String> {
    if param == "me" {
        return Ok(caller.id.clone());
    }

    Ok(state.user_service.get(param).await?.id)
}

/// Get a user's git SSH public key.
async fn get_git_ssh_key(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(user_param): Path<String>,
) -> AppResult<ApiResponse<GitSshKeyResponse>> {
    let target = resolve_target_user(&state, &user, &user_param).await?;

    let key = state
        .git_ssh_key_service
        .get(&Actor::from(&user), &target)
        .await?;

    Ok(ApiResponse::ok(key))
}

/// Regenerate a user's git SSH keypair, invalidating the old one.
async fn regenerate_git_ssh_key(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(user_param): Path<String>,
) -> AppResult<ApiResponse<GitSshKeyResponse>> {
    let target = resolve_target_user(&state, &user, &user_param).await?;

    let key = state
        .git_ssh_key_service
        .regenerate(&Actor::from(&user), &target)
        .await?;

    Ok(ApiResponse::ok(key))
}

/// Get the full keypair for the calling workspace agent.
async fn agent_git_ssh_key(
    AuthAgent(agent): AuthAgent,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<AgentGitSshKeyResponse>> {
    let key = state.git_ssh_key_service.get_for_agent(&agent).await?;

    Ok(ApiResponse::ok(key))
}

/// Routes scoped to a target user (owner/operator callers).
pub fn user_router() -> Router<AppState> {
    Router::new().route(
        "/{user}/gitsshkey",
        get(get_git_ssh_key).put(regenerate_git_ssh_key),
    )
}

/// Routes for workspace agents.
pub fn agent_router() -> Router<AppState> {
    Router::new().route("/me/gitsshkey", get(agent_git_ssh_key))
}
