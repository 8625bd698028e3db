use serde::Deserialize;

use axum::response::Json;

use patrol_common::generate_takedown_request;

#[derive(Deserialize)]
pub struct TakedownRequest {
    pub infringement_url: String,
    pub original_url: String,
}

pub async fn api_takedown(Json(body): Json<TakedownRequest>) -> Json<serde_json::Value> {
    let text = generate_takedown_request(&body.infringement_url, &body.original_url);
    Json(serde_json::json!({ "text": text }))
}
