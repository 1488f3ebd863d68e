// Gemini API client module

mod client;

pub use client::GeminiClient;

/// Outcome of the diagnostics connectivity probe.
///
/// The probe never fails the surrounding request; every outcome is data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Upstream answered the probe prompt successfully.
    Connected,
    /// Upstream returned a non-success status; carries its error message.
    UpstreamError(String),
    /// The call never reached upstream (DNS, TLS, timeout, ...).
    TransportFailure(String),
}

impl ProbeOutcome {
    /// Render the outcome as the diagnostics report's connection field.
    pub fn summary(&self) -> String {
        match self {
            ProbeOutcome::Connected => "connected ✓".to_string(),
            ProbeOutcome::UpstreamError(message) => format!("error: {message}"),
            ProbeOutcome::TransportFailure(message) => format!("fetch error: {message}"),
        }
    }
}
