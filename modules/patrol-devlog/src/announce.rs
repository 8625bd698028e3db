use anyhow::Result;
use tracing::info;

use chat_client::claude::{ChatRequest, Message};
use chat_client::ClaudeClient;

use crate::discord::DiscordWebhook;

const ANNOUNCE_MODEL: &str = "claude-3-5-sonnet-20240620";
const MAX_TOKENS: u32 = 500;

/// Commits whose messages are routine noise never reach the devlog.
const IGNORE_KEYWORDS: &[&str] = &["merge", "fix typo", "readme", "docs", "lint", "wip"];

const GHOSTWRITER_PROMPT: &str = "\
あなたは「Lore Patrol」を開発する19歳のエンジニアだ。
現在、クリエイターの権利を守るため、寝食を忘れてコードを書いている。
コミットメッセージを元に、X（Twitter）への投稿案を3つ作成せよ。

【制約】
・一人称は「僕」。
・口調はタメ口。少し攻撃的だが、情熱的。
・「勉強中」「初心者」という言葉は禁止。プロとして振る舞え。
・ハッシュタグ: #LorePatrol #BuildInPublic

【出力形式】
案1: [内容]
案2: [内容]
案3: [内容]
";

#[derive(Debug, PartialEq, Eq)]
pub enum AnnounceOutcome {
    Posted,
    SkippedTrivial,
}

/// Trivial commit messages (noise keywords, or too short) are skipped.
pub fn should_announce(commit_message: &str) -> bool {
    if commit_message.chars().count() < 5 {
        return false;
    }
    let lowered = commit_message.to_lowercase();
    !IGNORE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Draft tweet suggestions for a commit and post them to the devlog
/// webhook.
pub async fn announce_commit(
    claude: &ClaudeClient,
    webhook: &DiscordWebhook,
    commit_message: &str,
) -> Result<AnnounceOutcome> {
    if !should_announce(commit_message) {
        info!("Skipping: commit message is trivial");
        return Ok(AnnounceOutcome::SkippedTrivial);
    }

    let request = ChatRequest {
        model: ANNOUNCE_MODEL.to_string(),
        max_tokens: MAX_TOKENS,
        system: Some(GHOSTWRITER_PROMPT.to_string()),
        messages: vec![Message::user(format!(
            "作業内容（コミットログ）: {commit_message}"
        ))],
    };

    let response = claude.chat(&request).await?;
    let drafts = response.text();

    let content =
        format!("🛠 **New Commit Detected!**\n`{commit_message}`\n\n{drafts}");
    webhook.post(Some("Ghostwriter (DevLog)"), &content).await?;

    info!("Devlog post sent to Discord");
    Ok(AnnounceOutcome::Posted)
}
