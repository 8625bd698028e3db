use url::Url;
use uuid::Uuid;

use crate::types::{ClassifiedResult, ResultStatus, SearchHit, SummaryStats, PLACEHOLDER_SIMILARITY};

/// Extract the normalized host from a URL: lowercased, leading `www.`
/// stripped. Returns `None` when the URL does not parse or has no host.
pub fn registered_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    if host.is_empty() {
        return None;
    }
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Check whether a URL's host matches a whitelist entry, exactly or as a
/// subdomain. Unparseable URLs are never trusted: parse failure means
/// not whitelisted.
pub fn is_whitelisted(url: &str, whitelist_domains: &[String]) -> bool {
    if url.is_empty() || whitelist_domains.is_empty() {
        return false;
    }

    let Some(domain) = registered_domain(url) else {
        return false;
    };

    whitelist_domains.iter().any(|entry| {
        let entry = entry.trim().to_lowercase();
        let entry = entry.strip_prefix("www.").unwrap_or(&entry);
        if entry.is_empty() {
            return false;
        }
        // Exact match, or subdomain match on a `.` boundary.
        domain == entry || domain.ends_with(&format!(".{entry}"))
    })
}

/// Parse a comma-separated whitelist string: entries trimmed, empty tokens
/// dropped.
pub fn parse_whitelist(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify every search hit as safe or suspicious against the whitelist.
///
/// Order-preserving and lossless: a hit whose URL does not parse keeps the
/// raw URL string as its domain instead of being dropped. Duplicate URLs
/// are kept as distinct records. Each record gets a fresh id.
pub fn classify_results(hits: &[SearchHit], whitelist_domains: &[String]) -> Vec<ClassifiedResult> {
    hits.iter()
        .map(|hit| {
            let domain = registered_domain(&hit.url).unwrap_or_else(|| {
                tracing::debug!(url = %hit.url, "URL did not parse, keeping raw string as domain");
                hit.url.clone()
            });
            let status = if is_whitelisted(&hit.url, whitelist_domains) {
                ResultStatus::Safe
            } else {
                ResultStatus::Suspicious
            };

            ClassifiedResult {
                id: Uuid::new_v4(),
                title: hit.title.clone(),
                url: hit.url.clone(),
                domain,
                status,
                similarity: PLACEHOLDER_SIMILARITY,
            }
        })
        .collect()
}

/// Filter down to suspicious results, preserving order.
pub fn suspicious_results(results: &[ClassifiedResult]) -> Vec<ClassifiedResult> {
    results
        .iter()
        .filter(|r| r.status == ResultStatus::Suspicious)
        .cloned()
        .collect()
}

pub fn summary_statistics(results: &[ClassifiedResult]) -> SummaryStats {
    let total = results.len();
    let suspicious = results
        .iter()
        .filter(|r| r.status == ResultStatus::Suspicious)
        .count();

    SummaryStats {
        total,
        safe: total - suspicious,
        suspicious,
    }
}
