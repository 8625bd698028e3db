use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confidence score assigned to every classified result. The search provider
/// does not report per-match similarity, so this is a documented stub, not a
/// computed metric.
pub const PLACEHOLDER_SIMILARITY: u8 = 90;

/// A single raw match from the reverse-image-search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Safe,
    Suspicious,
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultStatus::Safe => write!(f, "safe"),
            ResultStatus::Suspicious => write!(f, "suspicious"),
        }
    }
}

/// A search hit after whitelist classification. Derived 1:1 from a
/// [`SearchHit`]; the id is freshly generated on every classification run
/// and carries no identity across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    /// Normalized host: lowercased, leading `www.` stripped. Falls back to
    /// the raw URL string when the URL does not parse.
    pub domain: String,
    pub status: ResultStatus,
    pub similarity: u8,
}

/// Aggregate counts over a classified result set. `total` is always
/// `safe + suspicious`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total: usize,
    pub safe: usize,
    pub suspicious: usize,
}
