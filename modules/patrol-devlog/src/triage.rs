use anyhow::{Context, Result};
use tracing::info;

use chat_client::openrouter::{ChatRequest, Message};
use chat_client::OpenRouterClient;

use crate::github::{GitHubClient, Issue};

const TRIAGE_MODEL: &str = "anthropic/claude-3.5-sonnet";

/// Parse the `ISSUE_NUMBER` the workflow passes in. Absent, `0`, or
/// non-numeric values mean a manual run with nothing to do.
pub fn parse_issue_number(raw: Option<&str>) -> Option<u64> {
    match raw?.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

fn triage_prompt(issue: &Issue) -> String {
    format!(
        "You are an AI developer.\n\
         The user posted an issue: \"{}\"\n\
         Body: \"{}\"\n\
         \n\
         Please suggest a solution or fix.",
        issue.title,
        issue.body.as_deref().unwrap_or("")
    )
}

/// Fetch an issue, ask the model for a suggested fix, and post the answer
/// back as a comment. Returns the model's response text.
pub async fn triage_issue(
    github: &GitHubClient,
    router: &OpenRouterClient,
    repo: &str,
    number: u64,
) -> Result<String> {
    let issue = github
        .get_issue(repo, number)
        .await
        .with_context(|| format!("fetching issue #{number} from {repo}"))?;

    info!(repo, number, title = %issue.title, "Triaging issue");

    let request = ChatRequest {
        model: TRIAGE_MODEL.to_string(),
        messages: vec![
            Message::system("You are a helpful AI developer."),
            Message::user(triage_prompt(&issue)),
        ],
    };

    let response = router.chat(&request).await?;
    let text = response
        .text()
        .context("model returned no choices")?
        .to_string();

    let comment = format!("🤖 **AI Auto-Dev Report**\n\n{text}");
    github
        .create_issue_comment(repo, number, &comment)
        .await
        .context("posting triage comment")?;

    info!(repo, number, "Triage comment posted");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_number_zero_or_garbage_means_noop() {
        assert_eq!(parse_issue_number(None), None);
        assert_eq!(parse_issue_number(Some("0")), None);
        assert_eq!(parse_issue_number(Some("")), None);
        assert_eq!(parse_issue_number(Some("abc")), None);
        assert_eq!(parse_issue_number(Some("42")), Some(42));
    }

    #[test]
    fn prompt_includes_title_and_body() {
        let issue = Issue {
            number: 7,
            title: "Whitelist misses subdomains".into(),
            body: Some("blog.pixiv.net is flagged".into()),
            html_url: "https://github.com/example/repo/issues/7".into(),
        };
        let prompt = triage_prompt(&issue);
        assert!(prompt.contains("Whitelist misses subdomains"));
        assert!(prompt.contains("blog.pixiv.net is flagged"));
    }
}
