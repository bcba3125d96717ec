use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::AppState;

#[derive(Serialize)]
pub struct LaunchResponse {
    pub success: bool,
    #[serde(rename = "streamlitUrl", skip_serializing_if = "Option::is_none")]
    pub streamlit_url: Option<String>,
    pub message: String,
}

/// Hands the client the analyzer destination. Stateless; the only failure
/// is a deployment with the destination disabled.
pub async fn run_app(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LaunchResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.launch.analyzer_url() {
        Some(url) => {
            info!("Handing out analyzer destination {}", url);
            Ok(Json(LaunchResponse {
                success: true,
                streamlit_url: Some(url.to_string()),
                message: state.launch.message().to_string(),
            }))
        }
        None => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "message": "The analyzer is temporarily unavailable"
            })),
        )),
    }
}
