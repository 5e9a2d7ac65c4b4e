//! API endpoints.

mod git_ssh_key;

use axum::{Router, middleware as axum_middleware};

use crate::middleware::{AppState, agent_auth_middleware, auth_middleware};

/// Create the API router.
///
/// User-scoped routes and agent routes get their own authentication
/// middleware, so a request only ever carries one principal kind.
pub fn router(state: AppState) -> Router {
    let user_routes = git_ssh_key::user_router().layer(axum_middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    let agent_routes = git_ssh_key::agent_router().layer(axum_middleware::from_fn_with_state(
        state.clone(),
        agent_auth_middleware,
    ));

    Router::new()
        .nest("/users", user_routes)
        .nest("/workspaceagents", agent_routes)
        .with_state(state)
}
