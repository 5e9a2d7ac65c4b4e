//! Workbridge server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workbridge_api::{middleware::AppState, router as api_router};
use workbridge_common::Config;
use workbridge_core::{
    GitSshKeyService, UserScopeAuthorizer, UserService, WorkspaceAgentService,
};
use workbridge_db::repositories::{
    GitSshKeyRepository, UserRepository, WorkspaceAgentRepository, WorkspaceBuildRepository,
    WorkspaceRepository, WorkspaceResourceRepository,
};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workbridge=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting workbridge server...");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Connect to database
    let db = workbridge_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    workbridge_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let user_repo = UserRepository::new(Arc::clone(&db));
    let agent_repo = WorkspaceAgentRepository::new(Arc::clone(&db));
    let key_repo = GitSshKeyRepository::new(Arc::clone(&db));
    let resource_repo = WorkspaceResourceRepository::new(Arc::clone(&db));
    let build_repo = WorkspaceBuildRepository::new(Arc::clone(&db));
    let workspace_repo = WorkspaceRepository::new(Arc::clone(&db));

    // Initialize services
    let state = AppState {
        user_service: UserService::new(user_repo),
        workspace_agent_service: WorkspaceAgentService::new(agent_repo),
        git_ssh_key_service: GitSshKeyService::new(
            key_repo,
            resource_repo,
            build_repo,
            workspace_repo,
            Arc::new(UserScopeAuthorizer),
            config.ssh_keygen.algorithm,
        ),
    };

    let app = axum::Router::new()
        .nest("/api/v1", api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, url = %config.server.url, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
