// Types for the promptlens HTTP surface

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
///
/// Every field is optional at the serde level; presence of the image fields
/// is enforced during translation so the failure is a 400, not a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "imageBase64")]
    pub image_base64: Option<String>,

    #[serde(rename = "imageMime")]
    pub image_mime: Option<String>,

    /// Style preset: detailed, concise, technical, artistic.
    pub style: Option<String>,

    /// Output language: english or portuguese.
    pub language: Option<String>,

    /// Requested number of prompt variations. Clients send this as either
    /// a JSON number or a numeric string.
    pub variations: Option<Variations>,

    /// Focus preset: full, style, composition, color.
    pub focus: Option<String>,
}

impl AnalyzeRequest {
    /// Resolved variation count: positive integer, defaulting to 1 when the
    /// field is absent or unparseable.
    pub fn variation_count(&self) -> u32 {
        self.variations.as_ref().map_or(1, Variations::resolve)
    }
}

/// Lenient carrier for the `variations` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Variations {
    Count(i64),
    Fraction(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Variations {
    pub fn resolve(&self) -> u32 {
        let count = match self {
            Variations::Count(n) => *n,
            Variations::Fraction(f) => *f as i64,
            Variations::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
            Variations::Other(_) => 0,
        };
        if count >= 1 {
            count as u32
        } else {
            1
        }
    }
}

/// Body of `/api/test`.
///
/// Field names (including the upper-case credential field) are fixed for
/// compatibility with existing clients of this endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub status: String,

    #[serde(rename = "GEMINI_API_KEY")]
    pub api_key_preview: String,

    pub gemini_connection: String,

    pub node_version: String,
}
