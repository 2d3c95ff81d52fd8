//! Pull-request status reporting against the Azure DevOps Git API.
//!
//! [`RunContext`] resolves the four ambient pipeline values at a single
//! entry point, [`AdoGitClient`] speaks the REST API, and
//! [`StatusReporter`] wraps both behind a `report` call that never fails;
//! a broken review-system connection must not fail the policy check itself.

pub mod client;
pub mod context;
pub mod report;

pub use client::AdoGitClient;
pub use context::{ContextIssue, RunContext};
pub use report::StatusReporter;
