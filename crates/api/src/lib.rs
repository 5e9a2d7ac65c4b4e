//! HTTP API layer for workbridge.
//!
//! This crate provides the REST API for the git SSH key service:
//!
//! - **Endpoints**: user-scoped key routes and the workspace agent route
//! - **Extractors**: authenticated user and agent principals
//! - **Middleware**: bearer-token authentication per principal kind
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
