use std::fmt;

/// Env var holding the pipeline's access token (`System.AccessToken`).
pub const ACCESS_TOKEN_VAR: &str = "SYSTEM_ACCESSTOKEN";
/// Env var holding the repository id (`Build.Repository.ID`).
pub const REPOSITORY_ID_VAR: &str = "BUILD_REPOSITORY_ID";
/// Env var holding the pull request id (`System.PullRequest.PullRequestId`).
pub const PULL_REQUEST_ID_VAR: &str = "SYSTEM_PULLREQUEST_PULLREQUESTID";
/// Env var holding the collection URL (`System.CollectionUri`).
pub const COLLECTION_URL_VAR: &str = "SYSTEM_COLLECTIONURI";

/// The set of ambient pipeline values needed to address the status API.
///
/// Resolved once per report call, at a single entry point, then passed
/// explicitly; nothing below this reads the environment.
///
/// # Examples
///
/// ```
/// use razorcheck_status::context::{RunContext, ACCESS_TOKEN_VAR};
///
/// let ctx = RunContext::resolve_with(|var| match var {
///     ACCESS_TOKEN_VAR => Some("secret".into()),
///     "BUILD_REPOSITORY_ID" => Some("repo-guid".into()),
///     "SYSTEM_PULLREQUEST_PULLREQUESTID" => Some("42".into()),
///     "SYSTEM_COLLECTIONURI" => Some("https://dev.azure.com/org/".into()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(ctx.pull_request_id, 42);
/// ```
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Bearer/personal-access credential for the pipeline identity.
    pub access_token: String,
    /// Repository GUID the pull request lives in.
    pub repository_id: String,
    /// Pull request number.
    pub pull_request_id: u64,
    /// Collection/organization base URL.
    pub collection_url: String,
}

/// Why a [`RunContext`] could not be resolved.
///
/// One issue per value, so each missing value produces its own warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextIssue {
    /// `System.AccessToken` was not exposed to the step.
    MissingAccessToken,
    /// `Build.Repository.ID` was not set.
    MissingRepositoryId,
    /// `System.PullRequest.PullRequestId` was not set (not a PR build).
    MissingPullRequestId,
    /// `System.CollectionUri` was not set.
    MissingCollectionUrl,
    /// The pull request id was present but not a number.
    InvalidPullRequestId(String),
}

impl fmt::Display for ContextIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextIssue::MissingAccessToken => {
                write!(f, "Could not get system access token. Not posting pull request status.")
            }
            ContextIssue::MissingRepositoryId => {
                write!(f, "Could not get repository id. Not posting pull request status.")
            }
            ContextIssue::MissingPullRequestId => {
                write!(f, "Could not get pull request id. Not posting pull request status.")
            }
            ContextIssue::MissingCollectionUrl => {
                write!(f, "Could not get collection URL. Not posting pull request status.")
            }
            ContextIssue::InvalidPullRequestId(raw) => {
                write!(
                    f,
                    "Could not parse pull request id \"{raw}\". Not posting pull request status."
                )
            }
        }
    }
}

impl RunContext {
    /// Resolve the context from the process environment, warning on stderr
    /// for every value that is missing.
    ///
    /// `None` means "skip reporting"; it is never an error.
    pub fn from_env() -> Option<Self> {
        match Self::resolve_with(|var| std::env::var(var).ok()) {
            Ok(ctx) => Some(ctx),
            Err(issues) => {
                for issue in issues {
                    eprintln!("{issue}");
                }
                None
            }
        }
    }

    /// Resolve the context through an explicit lookup function.
    ///
    /// All four values are checked before returning, so the caller gets one
    /// [`ContextIssue`] per missing value rather than only the first.
    ///
    /// # Errors
    ///
    /// Returns every [`ContextIssue`] found when any value is absent or the
    /// pull request id does not parse as a number.
    pub fn resolve_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Vec<ContextIssue>> {
        let mut issues = Vec::new();

        let access_token = lookup(ACCESS_TOKEN_VAR);
        if access_token.is_none() {
            issues.push(ContextIssue::MissingAccessToken);
        }
        let repository_id = lookup(REPOSITORY_ID_VAR);
        if repository_id.is_none() {
            issues.push(ContextIssue::MissingRepositoryId);
        }
        let raw_pull_request_id = lookup(PULL_REQUEST_ID_VAR);
        let pull_request_id = match &raw_pull_request_id {
            None => {
                issues.push(ContextIssue::MissingPullRequestId);
                None
            }
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    issues.push(ContextIssue::InvalidPullRequestId(raw.clone()));
                    None
                }
            },
        };
        let collection_url = lookup(COLLECTION_URL_VAR);
        if collection_url.is_none() {
            issues.push(ContextIssue::MissingCollectionUrl);
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Self {
            access_token: access_token.unwrap(),
            repository_id: repository_id.unwrap(),
            pull_request_id: pull_request_id.unwrap(),
            collection_url: collection_url.unwrap(),
        })
    }
}
