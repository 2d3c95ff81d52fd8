//! Core types, configuration, and error handling for razorcheck.
//!
//! This crate provides the shared foundation used by the other razorcheck
//! crates:
//! - [`CheckError`] — unified error type using `thiserror`
//! - [`CheckConfig`] — configuration loaded from `.razorcheck.toml`
//! - Shared types: [`StatusState`], [`StatusContext`], [`StatusReport`]

mod config;
mod error;
mod types;

pub use config::{CheckConfig, PolicyConfig, StatusConfig};
pub use error::CheckError;
pub use types::{StatusContext, StatusReport, StatusState};

/// A convenience `Result` type for razorcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
