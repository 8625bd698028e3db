use anyhow::{anyhow, Result};
use tracing::debug;

/// Thin Discord webhook client. One webhook URL per handle.
pub struct DiscordWebhook {
    url: String,
    http: reqwest::Client,
}

impl DiscordWebhook {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Post a message, optionally overriding the webhook's display name.
    pub async fn post(&self, username: Option<&str>, content: &str) -> Result<()> {
        let mut payload = serde_json::json!({ "content": content });
        if let Some(name) = username {
            payload["username"] = serde_json::Value::String(name.to_string());
        }

        debug!("Posting to Discord webhook");

        let response = self.http.post(&self.url).json(&payload).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("Discord webhook error ({}): {}", status, error_text));
        }

        Ok(())
    }
}
