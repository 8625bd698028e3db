pub mod error;
pub mod mock;
pub mod types;

pub use error::{Result, SearchError};
pub use mock::mock_results;
pub use types::{LensResponse, VisualMatch};

use std::path::PathBuf;
use std::time::Duration;

use patrol_common::SearchHit;

const BASE_URL: &str = "https://serpapi.com/search.json";

/// Lens engine identifier on SerpApi.
const ENGINE: &str = "google_lens";

/// Upper bound on the provider call. Expiry surfaces as
/// [`SearchError::Timeout`]; callers treat it like any other provider error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Matches are truncated to the top N the provider returns.
const MAX_RESULTS: usize = 20;

const DEFAULT_TITLE: &str = "No Title";

/// Where the image to search for lives.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Publicly reachable image URL, passed straight to the provider.
    Url(String),
    /// Local file (e.g. a request-scoped temp upload), sent as multipart.
    File(PathBuf),
}

pub struct SerpClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Run a reverse image search and return the top matches, reduced to
    /// `{url, title}`.
    ///
    /// This is the explicit provider boundary: errors and empty result
    /// sets are returned as-is. Substituting the mock fixture is the
    /// caller's decision, not this client's.
    pub async fn reverse_image_search(&self, image: &ImageSource) -> Result<Vec<SearchHit>> {
        let request = match image {
            ImageSource::Url(url) => {
                tracing::debug!(image_url = %url, "Lens search by URL");
                self.http
                    .get(&self.base_url)
                    .query(&[
                        ("engine", ENGINE),
                        ("api_key", self.api_key.as_str()),
                        ("url", url.as_str()),
                    ])
            }
            ImageSource::File(path) => {
                tracing::debug!(path = %path.display(), "Lens search by upload");
                let bytes = std::fs::read(path)
                    .map_err(|e| SearchError::ImageRead(format!("{}: {e}", path.display())))?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_string());
                let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                self.http
                    .post(&self.base_url)
                    .query(&[("engine", ENGINE), ("api_key", self.api_key.as_str())])
                    .multipart(reqwest::multipart::Form::new().part("image", part))
            }
        };

        let request = request.timeout(REQUEST_TIMEOUT);

        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let lens: LensResponse = resp.json().await?;
        Ok(parse_visual_matches(lens.visual_matches))
    }
}

/// Reduce raw visual matches to search hits: top 20, missing titles become
/// `"No Title"`, missing links become empty strings.
pub fn parse_visual_matches(matches: Vec<VisualMatch>) -> Vec<SearchHit> {
    matches
        .into_iter()
        .take(MAX_RESULTS)
        .map(|m| SearchHit {
            url: m.link.unwrap_or_default(),
            title: m.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lens_response_json() {
        let json = r#"{
            "search_metadata": {"status": "Success"},
            "visual_matches": [
                {"link": "https://evil.net/a", "title": "stolen art"},
                {"link": "https://pixiv.net/artworks/1"}
            ]
        }"#;
        let lens: LensResponse = serde_json::from_str(json).unwrap();
        let hits = parse_visual_matches(lens.visual_matches);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://evil.net/a");
        assert_eq!(hits[0].title, "stolen art");
        assert_eq!(hits[1].title, "No Title");
    }

    #[test]
    fn response_without_matches_parses_to_empty() {
        let lens: LensResponse = serde_json::from_str(r#"{"search_metadata": {}}"#).unwrap();
        assert!(parse_visual_matches(lens.visual_matches).is_empty());
    }

    #[test]
    fn truncates_to_top_twenty() {
        let matches: Vec<VisualMatch> = (0..35)
            .map(|i| VisualMatch {
                link: Some(format!("https://site.example/{i}")),
                title: Some(format!("match {i}")),
            })
            .collect();
        let hits = parse_visual_matches(matches);
        assert_eq!(hits.len(), 20);
        assert_eq!(hits[0].url, "https://site.example/0");
        assert_eq!(hits[19].url, "https://site.example/19");
    }
}
