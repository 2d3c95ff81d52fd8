use razorcheck_core::{CheckError, StatusConfig, StatusContext, StatusReport, StatusState};

use crate::client::AdoGitClient;
use crate::context::RunContext;

/// Posts this check's status entries to the pull request of the current run.
///
/// `report` never fails: a missing run context downgrades to warnings, and
/// remote failures are logged and swallowed. The pass/fail decision of the
/// pipeline must not depend on the review system being reachable.
///
/// # Examples
///
/// ```no_run
/// use razorcheck_core::{StatusConfig, StatusState};
/// use razorcheck_status::StatusReporter;
///
/// # async fn demo() {
/// let reporter = StatusReporter::new(StatusConfig::default());
/// reporter
///     .report(StatusState::Pending, "Checking for @code blocks in razor files.")
///     .await;
/// # }
/// ```
pub struct StatusReporter {
    config: StatusConfig,
}

impl StatusReporter {
    /// Create a reporter with the given status configuration.
    pub fn new(config: StatusConfig) -> Self {
        Self { config }
    }

    /// Attach `state` with `description` to the current pull request.
    ///
    /// Resolves the run context from the environment on every call; when any
    /// of the four addressing values is absent, one warning per missing value
    /// is emitted and no network call is made.
    pub async fn report(&self, state: StatusState, description: &str) {
        let Some(ctx) = RunContext::from_env() else {
            return;
        };
        if let Err(err) = self.submit(&ctx, state, description).await {
            eprintln!("{err}");
        }
    }

    async fn submit(
        &self,
        ctx: &RunContext,
        state: StatusState,
        description: &str,
    ) -> Result<(), CheckError> {
        let client = AdoGitClient::new(ctx, &self.config.api_version)?;

        let mut report = StatusReport::new(
            state,
            description,
            StatusContext {
                name: self.config.context_name.clone(),
                genre: self.config.context_genre.clone(),
            },
        );

        // Statuses attach per iteration. The count stands in for the latest
        // iteration id, which holds only while ids stay 1-based and
        // contiguous. Best-effort: on failure the default of 1 is kept.
        match client.iteration_count().await {
            Ok(count) => report.iteration_id = count,
            Err(err) => eprintln!("{err}"),
        }

        client.post_status(&report).await
    }
}
