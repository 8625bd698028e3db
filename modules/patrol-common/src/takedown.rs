use std::collections::HashMap;

use crate::types::ClassifiedResult;

/// Render the fixed takedown-request letter for one infringing URL.
///
/// Pure template substitution: both URLs are interpolated verbatim, no
/// validation or escaping.
pub fn generate_takedown_request(target_url: &str, original_url: &str) -> String {
    format!(
        "件名: 著作権侵害による画像削除の請求\n\
         \n\
         {target_url} の運営者様\n\
         \n\
         私は以下の画像の著作権者です。\n\
         \n\
         正規URL: {original_url}\n\
         \n\
         貴サイトにおける無断掲載を確認しました。\n\
         著作権法に基づき、24時間以内の削除を求めます。\n\
         \n\
         削除が行われない場合、法的措置を検討させていただきます。\n\
         \n\
         何卒よろしくお願いいたします。\n"
    )
}

/// Generate one letter per suspicious result, keyed by infringing URL.
/// Results with an empty URL are skipped; duplicate URLs collapse to the
/// last-written letter.
pub fn generate_batch_requests(
    suspicious: &[ClassifiedResult],
    original_url: &str,
) -> HashMap<String, String> {
    let mut requests = HashMap::new();
    for item in suspicious {
        if item.url.is_empty() {
            continue;
        }
        requests.insert(
            item.url.clone(),
            generate_takedown_request(&item.url, original_url),
        );
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultStatus, PLACEHOLDER_SIMILARITY};
    use uuid::Uuid;

    fn suspicious(url: &str) -> ClassifiedResult {
        ClassifiedResult {
            id: Uuid::new_v4(),
            title: "t".into(),
            url: url.into(),
            domain: url.into(),
            status: ResultStatus::Suspicious,
            similarity: PLACEHOLDER_SIMILARITY,
        }
    }

    #[test]
    fn letter_contains_both_urls_and_deadline() {
        let letter = generate_takedown_request(
            "https://evil.net/a",
            "https://pixiv.net/artworks/1",
        );
        assert!(letter.contains("https://evil.net/a"));
        assert!(letter.contains("https://pixiv.net/artworks/1"));
        assert!(letter.contains("24時間以内"));
    }

    #[test]
    fn letter_is_deterministic() {
        let a = generate_takedown_request("https://x.example/1", "https://y.example/2");
        let b = generate_takedown_request("https://x.example/1", "https://y.example/2");
        assert_eq!(a, b);
    }

    #[test]
    fn batch_generates_one_letter_per_url() {
        let items = vec![suspicious("https://evil.net/a"), suspicious("https://evil.net/b")];
        let batch = generate_batch_requests(&items, "https://pixiv.net/artworks/1");
        assert_eq!(batch.len(), 2);
        assert!(batch["https://evil.net/a"].contains("https://evil.net/a"));
    }

    #[test]
    fn batch_skips_empty_urls_and_collapses_duplicates() {
        let items = vec![
            suspicious(""),
            suspicious("https://evil.net/a"),
            suspicious("https://evil.net/a"),
        ];
        let batch = generate_batch_requests(&items, "https://pixiv.net/artworks/1");
        assert_eq!(batch.len(), 1);
    }
}
