use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use chat_client::ClaudeClient;
use patrol_common::config::required_env;
use patrol_devlog::announce::announce_commit;
use patrol_devlog::discord::DiscordWebhook;

/// Posts AI-drafted devlog tweets to Discord for a non-trivial commit.
/// Invoked from CI with the commit message as the first argument.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("patrol_devlog=info".parse()?),
        )
        .init();

    let commit_message = std::env::args()
        .nth(1)
        .context("usage: devlog-announce <commit message>")?;

    let anthropic_key = required_env("ANTHROPIC_API_KEY");
    let webhook_url = required_env("DISCORD_WEBHOOK_URL");

    let claude = ClaudeClient::new(&anthropic_key);
    let webhook = DiscordWebhook::new(&webhook_url);

    announce_commit(&claude, &webhook, &commit_message).await?;
    Ok(())
}
