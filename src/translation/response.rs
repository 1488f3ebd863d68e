// Response translation (Gemini text → analysis JSON)

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Markdown code-fence markers, with the optional `json` tag and trailing
/// newline the models typically emit.
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\n?").expect("fence regex is valid"));

/// Remove markdown code-fence markers from model output and trim whitespace.
///
/// Idempotent: already-unfenced text comes back unchanged apart from the trim.
pub fn strip_code_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Parse the model's reply as JSON after fence cleanup.
///
/// No schema validation is applied: whatever syntactically valid JSON the
/// model returned is passed through verbatim. Parse failures map to a 500
/// carrying the parser's message.
pub fn parse_analysis(text: &str) -> Result<Value> {
    let clean = strip_code_fences(text);
    Ok(serde_json::from_str(&clean)?)
}
