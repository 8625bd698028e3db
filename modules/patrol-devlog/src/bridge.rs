use crate::github::NewIssue;

/// Issue titles keep at most this many characters of the message.
const TITLE_MAX_CHARS: usize = 30;

/// How messages in a Discord channel map onto GitHub issues.
/// Channels are matched by exact name.
pub struct ChannelRule {
    pub channel: &'static str,
    pub labels: &'static [&'static str],
    pub prefix: &'static str,
}

pub const CHANNEL_RULES: &[ChannelRule] = &[
    ChannelRule {
        channel: "💎feedback-ideas💎",
        labels: &["enhancement", "discord-feedback"],
        prefix: "[Idea] ",
    },
    ChannelRule {
        channel: "👹bug-reports👹",
        labels: &["bug", "discord-report"],
        prefix: "[Bug] ",
    },
];

pub fn rule_for_channel(channel: &str) -> Option<&'static ChannelRule> {
    CHANNEL_RULES.iter().find(|r| r.channel == channel)
}

/// Build the issue for a bridged Discord message. Returns `None` for
/// messages with no text content (attachment-only posts are ignored).
pub fn issue_from_message(
    rule: &ChannelRule,
    author_name: &str,
    author_display_name: &str,
    jump_url: &str,
    content: &str,
) -> Option<NewIssue> {
    if content.trim().is_empty() {
        return None;
    }

    let flattened = content.replace('\n', " ");
    let title_body: String = flattened.chars().take(TITLE_MAX_CHARS).collect();
    let title = if flattened.chars().count() > TITLE_MAX_CHARS {
        format!("{}{}...", rule.prefix, title_body)
    } else {
        format!("{}{}", rule.prefix, title_body)
    };

    let body = format!(
        "**Reporter:** {author_display_name} ({author_name})\n\
         **Source:** {jump_url}\n\
         \n\
         **Content:**\n{content}"
    );

    Some(NewIssue {
        title,
        body,
        labels: rule.labels.iter().map(|l| l.to_string()).collect(),
    })
}

/// Name for the discussion thread opened under the bridge's reply.
pub fn discussion_thread_name(issue_number: u64) -> String {
    format!("Discussion: Issue #{issue_number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea_rule() -> &'static ChannelRule {
        rule_for_channel("💎feedback-ideas💎").unwrap()
    }

    #[test]
    fn unknown_channels_have_no_rule() {
        assert!(rule_for_channel("general").is_none());
        assert!(rule_for_channel("bug-reports").is_none());
    }

    #[test]
    fn short_message_keeps_full_title() {
        let issue =
            issue_from_message(idea_rule(), "kumo", "Kumo", "https://discord.com/x", "Add dark mode")
                .unwrap();
        assert_eq!(issue.title, "[Idea] Add dark mode");
        assert_eq!(issue.labels, vec!["enhancement", "discord-feedback"]);
    }

    #[test]
    fn long_message_is_truncated_with_ellipsis() {
        let content = "a".repeat(45);
        let issue = issue_from_message(
            idea_rule(),
            "kumo",
            "Kumo",
            "https://discord.com/x",
            &content,
        )
        .unwrap();
        assert_eq!(issue.title, format!("[Idea] {}...", "a".repeat(30)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 31 multibyte characters must not split mid-codepoint.
        let content = "あ".repeat(31);
        let issue = issue_from_message(
            rule_for_channel("👹bug-reports👹").unwrap(),
            "kumo",
            "Kumo",
            "https://discord.com/x",
            &content,
        )
        .unwrap();
        assert_eq!(issue.title, format!("[Bug] {}...", "あ".repeat(30)));
    }

    #[test]
    fn newlines_are_flattened_in_titles_only() {
        let issue = issue_from_message(
            idea_rule(),
            "kumo",
            "Kumo",
            "https://discord.com/x",
            "line one\nline two",
        )
        .unwrap();
        assert_eq!(issue.title, "[Idea] line one line two");
        assert!(issue.body.contains("line one\nline two"));
    }

    #[test]
    fn empty_content_is_ignored() {
        assert!(
            issue_from_message(idea_rule(), "kumo", "Kumo", "https://discord.com/x", "  \n")
                .is_none()
        );
    }

    #[test]
    fn discussion_threads_are_named_after_the_issue() {
        assert_eq!(discussion_thread_name(7), "Discussion: Issue #7");
    }

    #[test]
    fn body_carries_reporter_and_source() {
        let issue = issue_from_message(
            idea_rule(),
            "kumo#1234",
            "Kumo",
            "https://discord.com/channels/1/2/3",
            "Add dark mode",
        )
        .unwrap();
        assert!(issue.body.contains("**Reporter:** Kumo (kumo#1234)"));
        assert!(issue.body.contains("**Source:** https://discord.com/channels/1/2/3"));
    }
}
