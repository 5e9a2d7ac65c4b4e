//! Core business logic for workbridge.

pub mod services;

pub use services::*;
