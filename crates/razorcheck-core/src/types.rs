use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a pull-request status entry.
///
/// Matches the Azure DevOps `GitStatusState` wire values (lowercase).
///
/// # Examples
///
/// ```
/// use razorcheck_core::StatusState;
///
/// let state = StatusState::Succeeded;
/// assert_eq!(serde_json::to_string(&state).unwrap(), "\"succeeded\"");
/// assert_eq!(state.to_string(), "succeeded");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// The check is running.
    Pending,
    /// The check passed.
    Succeeded,
    /// The check found a policy violation.
    Failed,
    /// The check itself broke before producing a verdict.
    Error,
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusState::Pending => "pending",
            StatusState::Succeeded => "succeeded",
            StatusState::Failed => "failed",
            StatusState::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// The (name, genre) pair the review system uses to distinguish this check's
/// status entries from others on the same pull request.
///
/// # Examples
///
/// ```
/// use razorcheck_core::StatusContext;
///
/// let ctx = StatusContext {
///     name: "no-code-block-policy".into(),
///     genre: "bqc".into(),
/// };
/// assert_eq!(ctx.name, "no-code-block-policy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusContext {
    /// Status name shown next to the check on the pull request.
    pub name: String,
    /// Category tag consumed by downstream policy tooling.
    pub genre: String,
}

/// A pull-request status payload for the Azure DevOps Git API.
///
/// Constructed fresh per report; its only destination is the remote API.
///
/// # Examples
///
/// ```
/// use razorcheck_core::{StatusContext, StatusReport, StatusState};
///
/// let ctx = StatusContext { name: "no-code-block-policy".into(), genre: "bqc".into() };
/// let report = StatusReport::new(StatusState::Pending, "Checking.", ctx);
/// assert_eq!(report.iteration_id, 1);
///
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.contains("\"iterationId\":1"));
/// assert!(json.contains("\"state\":\"pending\""));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Outcome being reported.
    pub state: StatusState,
    /// Human-readable message shown on the pull request.
    pub description: String,
    /// Identifying context for this check.
    pub context: StatusContext,
    /// Review iteration the status attaches to.
    pub iteration_id: u64,
}

impl StatusReport {
    /// Build a report against the default first iteration.
    pub fn new(state: StatusState, description: impl Into<String>, context: StatusContext) -> Self {
        Self {
            state,
            description: description.into(),
            context,
            iteration_id: 1,
        }
    }
}
