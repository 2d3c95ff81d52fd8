use std::time::Duration;

use razorcheck_core::{CheckError, StatusReport};
use serde::Deserialize;

use crate::context::RunContext;

/// Azure DevOps Git client scoped to one pull request.
///
/// Authenticates PAT-style: basic auth with an empty username and the access
/// token as the password, which is how pipeline access tokens are exchanged
/// for a session.
pub struct AdoGitClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    repository_id: String,
    pull_request_id: u64,
    api_version: String,
}

/// Shape of the `iterations` list response; only the count is consumed.
#[derive(Debug, Deserialize)]
struct IterationPage {
    count: u64,
}

impl AdoGitClient {
    /// Create a client bound to the pull request named by `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Status`] if the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use razorcheck_status::{AdoGitClient, RunContext};
    ///
    /// let ctx = RunContext::from_env().unwrap();
    /// let client = AdoGitClient::new(&ctx, "7.1").unwrap();
    /// ```
    pub fn new(ctx: &RunContext, api_version: &str) -> Result<Self, CheckError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CheckError::Status(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: ctx.collection_url.trim_end_matches('/').to_string(),
            access_token: ctx.access_token.clone(),
            repository_id: ctx.repository_id.clone(),
            pull_request_id: ctx.pull_request_id,
            api_version: api_version.to_string(),
        })
    }

    fn pr_url(&self, leaf: &str) -> String {
        format!(
            "{}/_apis/git/repositories/{}/pullRequests/{}/{leaf}?api-version={}",
            self.base_url, self.repository_id, self.pull_request_id, self.api_version,
        )
    }

    /// Fetch the number of review iterations on the pull request.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Status`] on network or API errors.
    pub async fn iteration_count(&self) -> Result<u64, CheckError> {
        let response = self
            .http
            .get(self.pr_url("iterations"))
            .basic_auth("", Some(&self.access_token))
            .send()
            .await
            .map_err(|e| CheckError::Status(format!("failed to fetch PR iterations: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckError::Status(format!(
                "Azure DevOps API error {status}: {body}"
            )));
        }

        let page: IterationPage = response
            .json()
            .await
            .map_err(|e| CheckError::Status(format!("failed to read iterations response: {e}")))?;
        Ok(page.count)
    }

    /// Create or update this check's status entry on the pull request.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Status`] on network or API errors.
    pub async fn post_status(&self, report: &StatusReport) -> Result<(), CheckError> {
        let response = self
            .http
            .post(self.pr_url("statuses"))
            .basic_auth("", Some(&self.access_token))
            .json(report)
            .send()
            .await
            .map_err(|e| CheckError::Status(format!("failed to post PR status: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckError::Status(format!(
                "Azure DevOps API error {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> RunContext {
        RunContext {
            access_token: "secret".into(),
            repository_id: "repo-guid".into(),
            pull_request_id: 42,
            collection_url: "https://dev.azure.com/org/".into(),
        }
    }

    #[test]
    fn pr_url_addresses_repo_and_pull_request() {
        let client = AdoGitClient::new(&test_context(), "7.1").unwrap();
        assert_eq!(
            client.pr_url("statuses"),
            "https://dev.azure.com/org/_apis/git/repositories/repo-guid/pullRequests/42/statuses?api-version=7.1"
        );
    }

    #[test]
    fn pr_url_handles_collection_url_without_trailing_slash() {
        let ctx = RunContext {
            collection_url: "https://dev.azure.com/org".into(),
            ..test_context()
        };
        let client = AdoGitClient::new(&ctx, "7.1").unwrap();
        assert_eq!(
            client.pr_url("iterations"),
            "https://dev.azure.com/org/_apis/git/repositories/repo-guid/pullRequests/42/iterations?api-version=7.1"
        );
    }

    #[test]
    fn iteration_page_deserializes_count() {
        let page: IterationPage =
            serde_json::from_str(r#"{"count": 3, "value": [{}, {}, {}]}"#).unwrap();
        assert_eq!(page.count, 3);
    }
}
