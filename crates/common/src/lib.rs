//! Common utilities and shared types for workbridge.
//!
//! This crate provides foundational components used across all workbridge
//! crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **SSH keys**: Git SSH keypair generation for workspace git operations
//! - **ID Generation**: ULID-based unique identifiers via [`IdGenerator`]
//!
//! # Example
//!
//! ```no_run
//! use workbridge_common::{AppResult, Config, IdGenerator};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     let id = id_gen.generate();
//!     println!("Generated ID: {id}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod sshkey;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
pub use sshkey::{SshKeygenAlgorithm, SshKeypair, generate_ssh_keypair};
