use serde::Deserialize;

/// The slice of a SerpApi Google Lens response this client cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct LensResponse {
    #[serde(default)]
    pub visual_matches: Vec<VisualMatch>,
}

/// A single visual match from Google Lens.
#[derive(Debug, Clone, Deserialize)]
pub struct VisualMatch {
    pub link: Option<String>,
    pub title: Option<String>,
}
