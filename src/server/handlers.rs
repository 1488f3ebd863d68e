// HTTP request handlers

use super::routes::AppState;
use crate::error::{ApiError, Result};
use crate::models::api::{AnalyzeRequest, DiagnosticsReport};
use crate::translation::{parse_analysis, translate_request};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info, warn};

/// CORS preflight for /api/analyze: succeed with no body before any other
/// processing, for any caller origin.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Method-router fallback: anything other than POST (after preflight) is
/// rejected with a JSON 405.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Handler for POST /api/analyze.
///
/// Validates the image payload, builds the instruction prompt, forwards
/// prompt + inline image to Gemini, and returns the model's JSON verbatim.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: String, // raw body; deserialized manually for better 400 messages
) -> Result<Json<Value>> {
    let req: AnalyzeRequest = serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to deserialize analyze request: {}", e);
        ApiError::InvalidRequest(format!("JSON deserialization error: {e}"))
    })?;

    info!(
        style = req.style.as_deref().unwrap_or("detailed"),
        focus = req.focus.as_deref().unwrap_or("full"),
        variations = req.variation_count(),
        "Received analyze request"
    );

    // Validation and prompt assembly; missing image fields surface as 400.
    let gemini_req = translate_request(&req)?;

    let Some(api_key) = state.config.gemini.api_key.as_deref() else {
        return Err(ApiError::Config(
            "GEMINI_API_KEY not configured in environment variables".to_string(),
        ));
    };

    let response = state.gemini.generate_content(api_key, gemini_req).await?;

    let text = response.first_text().ok_or(ApiError::EmptyResponse)?;
    debug!("Extracted {} chars of model output", text.len());

    // Pass-through: fence cleanup + syntactic JSON parse, no schema check.
    let analysis = parse_analysis(text)?;
    Ok(Json(analysis))
}

/// Handler for /api/test (any method).
///
/// Introspection endpoint: always 200, even when the credential is missing
/// or upstream is unreachable — those conditions are reported in the body.
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let preview = state
        .gemini
        .credential_preview()
        .unwrap_or_else(|| "NOT SET".to_string());

    let connection = match state.config.gemini.api_key.as_deref() {
        Some(api_key) => state.gemini.probe(api_key).await.summary(),
        None => "not tested".to_string(),
    };

    Json(DiagnosticsReport {
        status: "backend online ✓".to_string(),
        api_key_preview: preview,
        gemini_connection: connection,
        node_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
