use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::debug;

const GITHUB_API_URL: &str = "https://api.github.com";

/// The fields of a GitHub issue this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
}

/// Payload for creating an issue.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Explicitly constructed GitHub REST client. Built per run by the
/// binaries; never a module-level global.
pub struct GitHubClient {
    token: String,
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            http: reqwest::Client::new(),
            base_url: GITHUB_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        // GitHub rejects requests without a user agent.
        headers.insert(USER_AGENT, HeaderValue::from_static("lore-patrol-devlog"));
        Ok(headers)
    }

    pub async fn get_issue(&self, repo: &str, number: u64) -> Result<Issue> {
        let url = format!("{}/repos/{}/issues/{}", self.base_url, repo, number);

        debug!(repo, number, "Fetching issue");

        let response = self.http.get(&url).headers(self.headers()?).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("GitHub API error ({}): {}", status, error_text));
        }

        Ok(response.json().await?)
    }

    pub async fn create_issue(&self, repo: &str, issue: &NewIssue) -> Result<Issue> {
        let url = format!("{}/repos/{}/issues", self.base_url, repo);

        debug!(repo, title = %issue.title, "Creating issue");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(issue)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("GitHub API error ({}): {}", status, error_text));
        }

        Ok(response.json().await?)
    }

    pub async fn create_issue_comment(&self, repo: &str, number: u64, body: &str) -> Result<()> {
        let url = format!("{}/repos/{}/issues/{}/comments", self.base_url, repo, number);

        debug!(repo, number, "Posting issue comment");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("GitHub API error ({}): {}", status, error_text));
        }

        Ok(())
    }
}
