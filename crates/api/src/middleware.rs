//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use workbridge_core::{GitSshKeyService, UserService, WorkspaceAgentService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// User lookup and token authentication.
    pub user_service: UserService,
    /// Workspace agent token authentication.
    pub workspace_agent_service: WorkspaceAgentService,
    /// Git SSH key lifecycle and disclosure.
    pub git_ssh_key_service: GitSshKeyService,
}

/// User authentication middleware.
///
/// Inserts the authenticated `user::Model` into request extensions; the
/// `AuthUser` extractor rejects requests where it is absent.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&req) {
        match state.user_service.authenticate_by_token(&token).await {
            Ok(user) => {
                req.extensions_mut().insert(user);
            }
            Err(_) => tracing::debug!("Rejected user session token"),
        }
    }

    next.run(req).await
}

/// Workspace agent authentication middleware.
///
/// Agents carry their own session token; a user token never resolves to
/// an agent principal here.
pub async fn agent_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&req) {
        match state
            .workspace_agent_service
            .authenticate_by_token(&token)
            .await
        {
            Ok(agent) => {
                req.extensions_mut().insert(agent);
            }
            Err(_) => tracing::debug!("Rejected workspace agent token"),
        }
    }

    next.run(req).await
}

fn bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}
