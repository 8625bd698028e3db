use patrol_common::SearchHit;

/// The deterministic demo-mode fixture. Used whenever no API key is
/// configured, and substituted by callers when the live provider fails or
/// returns nothing. Same four hits on every call.
pub fn mock_results() -> Vec<SearchHit> {
    vec![
        SearchHit {
            url: "http://kangaipakattena-matome.com/entry/123".to_string(),
            title: "無断転載まとめ速報 - 画像まとめ".to_string(),
        },
        SearchHit {
            url: "https://twitter.com/my_account/status/1".to_string(),
            title: "自分のツイート".to_string(),
        },
        SearchHit {
            url: "https://suspicious-site.net/gallery/img456".to_string(),
            title: "フリー画像ギャラリー".to_string(),
        },
        SearchHit {
            url: "https://pixiv.net/artworks/98765432".to_string(),
            title: "Pixiv - オリジナル投稿".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_deterministic() {
        let a = mock_results();
        let b = mock_results();
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
    }
}
