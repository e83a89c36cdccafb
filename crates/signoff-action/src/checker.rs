use signoff_core::{ComplianceVerdict, PullRequestContext, SignoffError};
use tracing::{error, info, info_span, warn, Instrument};

use crate::event::TriggerEvent;
use crate::host::{HostError, RepositoryHost};
use crate::output::ActionOutput;

/// Step output carrying the verdict.
pub const SIGNEDOFF_OUTPUT: &str = "signedoff";

fn upstream(e: HostError) -> SignoffError {
    SignoffError::Upstream(e.to_string())
}

/// Checks one pull request's commits for sign-off trailers and reports the
/// result back through the host.
pub struct ComplianceChecker<'a> {
    host: &'a dyn RepositoryHost,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(host: &'a dyn RepositoryHost) -> Self {
        Self { host }
    }

    /// Fetch, classify, then either comment and label `fail/signedoff` or
    /// label `pass/signedoff`. Any host failure aborts the remaining steps.
    pub async fn check(
        &self,
        ctx: &PullRequestContext,
    ) -> Result<ComplianceVerdict, SignoffError> {
        let span = info_span!(
            "signoff",
            repo = %ctx.repo,
            pr = ctx.number,
            host = self.host.name()
        );
        self.check_inner(ctx).instrument(span).await
    }

    async fn check_inner(
        &self,
        ctx: &PullRequestContext,
    ) -> Result<ComplianceVerdict, SignoffError> {
        let (pr, commits) = tokio::try_join!(
            self.host.get_pull_request(&ctx.repo, ctx.number),
            self.host.list_commits(&ctx.repo, ctx.number),
        )
        .map_err(upstream)?;

        warn!("Found: {} total commits", commits.len());
        for c in &commits {
            info!("{}: {}", c.short_sha(), c.subject());
        }

        let verdict = ComplianceVerdict::evaluate(&pr.author, &commits);
        let label = verdict.label();

        if verdict.pass {
            info!("All commits have a valid signed-off-by");
        } else {
            self.host
                .create_issue_comment(&ctx.repo, ctx.number, &verdict.report)
                .await
                .map_err(upstream)?;
            error!(
                "Found: {} commits without a valid signoff",
                verdict.non_compliant.len()
            );
            for c in &verdict.non_compliant {
                info!("{}: {}", c.short_sha(), c.subject());
            }
        }

        self.host
            .add_labels(&ctx.repo, ctx.number, &[label.as_str()])
            .await
            .map_err(upstream)?;

        Ok(verdict)
    }
}

/// Resolve the pull request from `event`, check it, and publish the
/// `signedoff` output. Non pull request events fail before any host call.
pub async fn run(
    event: &TriggerEvent,
    host: &dyn RepositoryHost,
    output: &ActionOutput,
) -> Result<ComplianceVerdict, SignoffError> {
    let ctx = event.pull_request_context()?;
    info!("checking {ctx} (opened by @{})", ctx.author);

    let verdict = ComplianceChecker::new(host).check(&ctx).await?;

    output
        .set_output(SIGNEDOFF_OUTPUT, &verdict.pass.to_string())
        .map_err(|e| SignoffError::Configuration(format!("write step output: {e}")))?;
    Ok(verdict)
}
