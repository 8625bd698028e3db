use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_client::OpenRouterClient;
use patrol_common::config::{optional_env, required_env};
use patrol_devlog::github::GitHubClient;
use patrol_devlog::triage::{parse_issue_number, triage_issue};

/// Asks the model for a suggested fix on a freshly opened issue and posts
/// the answer back as a comment. Invoked from CI with `ISSUE_NUMBER` set.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("patrol_devlog=info".parse()?),
        )
        .init();

    let token = required_env("GITHUB_TOKEN");
    let router_key = required_env("OPENROUTER_API_KEY");
    let repo = required_env("GITHUB_REPOSITORY");

    let issue_number = optional_env("ISSUE_NUMBER");
    let Some(number) = parse_issue_number(issue_number.as_deref()) else {
        info!("No issue number provided (manual run), nothing to do");
        return Ok(());
    };

    let github = GitHubClient::new(&token);
    let router = OpenRouterClient::new(&router_key);

    triage_issue(&github, &router, &repo, number).await?;
    Ok(())
}
