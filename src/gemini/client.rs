// Gemini API client

use super::ProbeOutcome;
use crate::config::GeminiConfig;
use crate::error::{ApiError, Result};
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::utils::logging;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Minimal prompt used by the diagnostics connectivity probe.
const PROBE_PROMPT: &str = "Say OK";
const PROBE_MAX_OUTPUT_TOKENS: u32 = 10;

/// Number of credential characters exposed by the redacted preview.
const CREDENTIAL_PREVIEW_LEN: usize = 8;

/// Client for the Gemini generative language API.
///
/// Holds a pooled HTTP client and the upstream configuration, including the
/// optional API credential. One `generateContent` call per invocation; no
/// retries and no streaming.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with connection pooling and keep-alive.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to create HTTP client: {e}")))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// The configured API credential, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }

    /// Redacted credential preview: first 8 characters plus an ellipsis.
    /// Never exposes the remainder of the credential.
    pub fn credential_preview(&self) -> Option<String> {
        self.api_key().map(|key| {
            let prefix: String = key.chars().take(CREDENTIAL_PREVIEW_LEN).collect();
            format!("{prefix}...")
        })
    }

    /// Call Gemini `generateContent` (blocking, single attempt).
    ///
    /// The credential travels as the `key` query parameter. Upstream failures
    /// are surfaced with their original HTTP status and a best-effort parse
    /// of the error body; transport failures map to a plain server error.
    pub async fn generate_content(
        &self,
        api_key: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );
        debug!(model = %self.config.model, "Calling generateContent API");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status,
                logging::sanitize(&error_text)
            );
            let message = Self::extract_error_message(&error_text)
                .unwrap_or_else(|| "Gemini API error".to_string());
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to read response body: {e}")))?;

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                ApiError::Internal(format!("Response parsing error: {e}"))
            })?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                candidate_tokens = ?usage.candidates_token_count,
                "Received Gemini response"
            );
        }

        Ok(gemini_response)
    }

    /// Connectivity probe for the diagnostics endpoint.
    ///
    /// Sends a trivial prompt with a small output cap and classifies the
    /// outcome instead of propagating it as a request failure.
    pub async fn probe(&self, api_key: &str) -> ProbeOutcome {
        let request = GenerateContentRequest {
            contents: vec![Content::from_parts(vec![Part::text(PROBE_PROMPT)])],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(PROBE_MAX_OUTPUT_TOKENS),
                ..Default::default()
            }),
        };

        match self.generate_content(api_key, request).await {
            Ok(_) => ProbeOutcome::Connected,
            Err(ApiError::Upstream { message, .. }) => ProbeOutcome::UpstreamError(message),
            Err(e) => ProbeOutcome::TransportFailure(e.to_string()),
        }
    }

    /// Extract the error message from an upstream error body.
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }
}
