// Request translation (analyze request → Gemini generateContent)

use crate::error::{ApiError, Result};
use crate::models::api::AnalyzeRequest;
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, Part,
};
use crate::models::presets;
use tracing::debug;

/// Fixed generation parameters for analysis calls.
const ANALYSIS_TEMPERATURE: f32 = 0.7;
const ANALYSIS_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Exact JSON structure the model is instructed to return. The instruction
/// forbids markdown fencing; the response side still strips fences because
/// models add them anyway.
const RESPONSE_SHAPE: &str = r#"{"analysis":{"subject":"","style":"","mood":"","colors":[],"composition":"","lighting":"","technical":""},"prompts":[{"id":1,"title":"","prompt":"","negative_prompt":"","style_tags":[],"aspect_ratio":"16:9","quality_modifiers":[]}],"metadata":{"model_suggested":"gemini-2.0-flash","analysis_confidence":0.95,"image_type":""}}"#;

/// Build the natural-language instruction for an analyze request.
///
/// Deterministic: presets resolve through fixed lookup tables with defaults,
/// and the variation count is clamped to a positive integer.
pub fn build_instruction(req: &AnalyzeRequest) -> String {
    let style = presets::style_guide(req.style.as_deref());
    let focus = presets::focus_guide(req.focus.as_deref());
    let language = presets::output_language(req.language.as_deref());
    let variations = req.variation_count();

    format!(
        "You are an expert AI image prompt engineer. Analyze the image and generate \
         {variations} image generation prompt(s) in {language}. Style: {style}, \
         focusing on {focus}. Return ONLY valid JSON with no markdown, no backticks, \
         no extra text. Use this exact structure: {RESPONSE_SHAPE}"
    )
}

/// Translate an analyze request into a Gemini `generateContent` request.
///
/// Fails with a 400-mapped error when either image field is missing or empty;
/// no other constraint is placed on the payload.
pub fn translate_request(req: &AnalyzeRequest) -> Result<GenerateContentRequest> {
    let image_base64 = req
        .image_base64
        .as_deref()
        .filter(|data| !data.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("Missing image data".to_string()))?;
    let image_mime = req
        .image_mime
        .as_deref()
        .filter(|mime| !mime.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("Missing image data".to_string()))?;

    let instruction = build_instruction(req);
    debug!(
        variations = req.variation_count(),
        mime = image_mime,
        "Built analysis instruction"
    );

    Ok(GenerateContentRequest {
        contents: vec![Content::from_parts(vec![
            Part::text(instruction),
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: image_mime.to_string(),
                    data: image_base64.to_string(),
                },
            },
        ])],
        generation_config: Some(GenerationConfig {
            temperature: Some(ANALYSIS_TEMPERATURE),
            top_p: None,
            max_output_tokens: Some(ANALYSIS_MAX_OUTPUT_TOKENS),
        }),
    })
}
