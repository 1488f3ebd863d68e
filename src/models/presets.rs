// Prompt preset lookup tables (style, focus, output language)

use phf::phf_map;

const DETAILED_STYLE: &str = "extremely detailed, covering all visual elements";
const FULL_FOCUS: &str = "all aspects: subject, style, composition, colors, mood, lighting";

/// Style descriptions keyed by the `style` preset.
static STYLE_GUIDES: phf::Map<&'static str, &'static str> = phf_map! {
    "detailed" => DETAILED_STYLE,
    "concise" => "concise and punchy, capturing the essence in few words",
    "technical" => "technical, focusing on camera settings, lighting conditions, and photographic techniques",
    "artistic" => "artistic and poetic, using evocative language",
};

/// Focus descriptions keyed by the `focus` preset.
static FOCUS_GUIDES: phf::Map<&'static str, &'static str> = phf_map! {
    "full" => FULL_FOCUS,
    "style" => "artistic style, visual aesthetics, rendering technique, and artistic medium",
    "composition" => "layout, framing, perspective, depth of field, and spatial arrangement",
    "color" => "color palette, harmony, tones, saturation, and color relationships",
};

/// Style description for a raw preset value, falling back to "detailed" when
/// the key is missing or unrecognized.
pub fn style_guide(raw: Option<&str>) -> &'static str {
    raw.and_then(|key| STYLE_GUIDES.get(key))
        .copied()
        .unwrap_or(DETAILED_STYLE)
}

/// Focus description for a raw preset value, falling back to "full".
pub fn focus_guide(raw: Option<&str>) -> &'static str {
    raw.and_then(|key| FOCUS_GUIDES.get(key))
        .copied()
        .unwrap_or(FULL_FOCUS)
}

/// Output-language label: Brazilian Portuguese when requested, English otherwise.
pub fn output_language(raw: Option<&str>) -> &'static str {
    match raw {
        Some("portuguese") => "Brazilian Portuguese",
        _ => "English",
    }
}
