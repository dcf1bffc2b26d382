//! Normalization of raw assistant text into canonical markdown.

use tracing::debug;

/// Bullet glyph used by some assistant responses.
const BULLET_GLYPH: &str = "\u{2022}";

/// The same bullet after a UTF-8 → Windows-1252 round trip (`â€¢`).
const MOJIBAKE_BULLET_GLYPH: &str = "\u{e2}\u{20ac}\u{a2}";

/// Substrings that mark text as loosely structured markdown.
const STRUCTURAL_MARKERS: [&str; 8] = [
    "**",
    "*",
    BULLET_GLYPH,
    MOJIBAKE_BULLET_GLYPH,
    "- ",
    "Key findings:",
    "Abstract:",
    "Summary:",
];

/// Cleans raw assistant text.
///
/// Literal `\n` and `\"` escape sequences are decoded first. If the text then
/// contains any structural marker, each line is rewritten:
/// - `**Heading**` lines become `### **Heading**`
/// - `* item` lines become `- item`
/// - bullet-glyph lines become `- item`
///
/// Everything else is kept. Text without markers is returned as decoded.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn clean(input: &str) -> String {
    let decoded = decode_escapes(input);
    if !has_structural_marker(&decoded) {
        return decoded;
    }

    let cleaned = reformat_structure(&decoded);
    debug!(output_len = cleaned.len(), "Reformatted structured response");
    cleaned
}

/// Returns true if `text` contains any marker that triggers reformatting.
#[must_use]
pub fn has_structural_marker(text: &str) -> bool {
    STRUCTURAL_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

fn decode_escapes(input: &str) -> String {
    input.replace("\\n", "\n").replace("\\\"", "\"")
}

fn reformat_structure(text: &str) -> String {
    text.split('\n')
        .map(reformat_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn reformat_line(raw_line: &str) -> String {
    let line = raw_line.trim();
    if line.is_empty() {
        return String::new();
    }

    if is_bold_heading(line) {
        return format!("### {line}");
    }

    if !line.starts_with("**")
        && let Some(rest) = line.strip_prefix('*')
    {
        return bullet(rest);
    }

    if let Some(rest) = line
        .strip_prefix(MOJIBAKE_BULLET_GLYPH)
        .or_else(|| line.strip_prefix(BULLET_GLYPH))
    {
        return bullet(rest);
    }

    line.to_string()
}

fn bullet(rest: &str) -> String {
    match rest.trim() {
        "" => "-".to_string(),
        item => format!("- {item}"),
    }
}

fn is_bold_heading(line: &str) -> bool {
    line.starts_with("**") && line.ends_with("**")
}
