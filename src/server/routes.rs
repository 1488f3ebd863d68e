// HTTP routes configuration

use super::handlers::{
    analyze_handler, diagnostics_handler, method_not_allowed, preflight_handler,
};
use super::middleware::request_id_layers;
use crate::config::AppConfig;
use crate::error::Result;
use crate::gemini::GeminiClient;
use axum::http::{header, Method};
use axum::routing::{any, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub gemini: Arc<GeminiClient>,
}

pub fn create_router(config: AppConfig, gemini: GeminiClient) -> Result<Router> {
    let state = AppState {
        config,
        gemini: Arc::new(gemini),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route(
            "/api/analyze",
            post(analyze_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed),
        )
        .route("/api/test", any(diagnostics_handler))
        // Allow large request bodies for base64-encoded images
        // 7MB PNG = ~9.5MB base64, so allow up to 50MB to be safe
        .layer(tower_http::limit::RequestBodyLimitLayer::new(50 * 1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
