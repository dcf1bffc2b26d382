//! Line recognizers for paper titles and per-paper fields.
//!
//! Title styles and field kinds are both evaluated in a fixed priority
//! order, first match wins. The order is part of the parsing contract:
//! reordering [`TITLE_STYLES`] or [`FIELD_ORDER`] changes which records and
//! fields come out of the same text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static LABELED_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\.\s*\*\*Title\*\*:?\s*(.*)").expect("labeled title regex is valid")
});

#[allow(clippy::expect_used)]
static BOLD_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*\*\*(.*?)\*\*").expect("bold title regex is valid")
});

#[allow(clippy::expect_used)]
static UNDERSCORE_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*__(.*?)__").expect("underscore title regex is valid")
});

#[allow(clippy::expect_used)]
static EMPHASIS_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*\*(.*?)\*").expect("emphasis title regex is valid")
});

#[allow(clippy::expect_used)]
static NUMBERED_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*(.*)$").expect("numbered title regex is valid")
});

// Any run of colons and whitespace after the label is skipped; a bare
// `Title:` label never opens a record.
#[allow(clippy::expect_used)]
static PLAIN_LABEL_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Title:?[:\s]*([^:\s].*)").expect("plain label title regex is valid")
});

#[allow(clippy::expect_used)]
static MARKDOWN_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*?)\]\([^)]+\)").expect("markdown link regex is valid")
});

#[allow(clippy::expect_used)]
static AUTHORS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Authors?:?\s*(.*)").expect("authors field regex is valid")
});

#[allow(clippy::expect_used)]
static PUBLISHED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Published:?\s*([A-Za-z]+ \d{1,2}(?:st|nd|rd|th)?, \d{4})")
        .expect("published field regex is valid")
});

#[allow(clippy::expect_used)]
static SUMMARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Summary|Abstract):?\s*(.*)").expect("summary field regex is valid")
});

#[allow(clippy::expect_used)]
static ARXIV_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://arxiv\.org/[\w\-/.]+").expect("arxiv url regex is valid")
});

/// Recognized title line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// `1. **Title**: Some Paper`
    LabeledTitle,
    /// `1. **Some Paper**`
    Bold,
    /// `1. __Some Paper__`
    Underscore,
    /// `1. *Some Paper*`
    Emphasis,
    /// `1. Some Paper` (catch-all for numbered lines)
    Numbered,
    /// `Title: Some Paper`
    PlainLabel,
}

/// Title styles in the order they are tried.
pub const TITLE_STYLES: [TitleStyle; 6] = [
    TitleStyle::LabeledTitle,
    TitleStyle::Bold,
    TitleStyle::Underscore,
    TitleStyle::Emphasis,
    TitleStyle::Numbered,
    TitleStyle::PlainLabel,
];

impl TitleStyle {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::LabeledTitle => &LABELED_TITLE_PATTERN,
            Self::Bold => &BOLD_TITLE_PATTERN,
            Self::Underscore => &UNDERSCORE_TITLE_PATTERN,
            Self::Emphasis => &EMPHASIS_TITLE_PATTERN,
            Self::Numbered => &NUMBERED_TITLE_PATTERN,
            Self::PlainLabel => &PLAIN_LABEL_TITLE_PATTERN,
        }
    }

    /// Returns the raw captured title text if `line` is in this style.
    #[must_use]
    pub fn capture(self, line: &str) -> Option<&str> {
        self.pattern()
            .captures(line)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
    }

    /// Returns a stable label for logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LabeledTitle => "labeled",
            Self::Bold => "bold",
            Self::Underscore => "underscore",
            Self::Emphasis => "emphasis",
            Self::Numbered => "numbered",
            Self::PlainLabel => "plain-label",
        }
    }
}

impl fmt::Display for TitleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line recognized as the start of a new paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    /// Style that matched first.
    pub style: TitleStyle,
    /// Title text with markdown links unwrapped and whitespace trimmed. May be empty.
    pub text: String,
}

/// Tries every title style in priority order and returns the first match.
#[must_use]
pub fn match_title(line: &str) -> Option<TitleMatch> {
    TITLE_STYLES.iter().find_map(|&style| {
        style.capture(line).map(|raw| TitleMatch {
            style,
            text: unwrap_markdown_link(raw.trim()).to_string(),
        })
    })
}

/// Returns `text` from a leading `[text](url)` link, or the input trimmed.
#[must_use]
pub fn unwrap_markdown_link(input: &str) -> &str {
    MARKDOWN_LINK_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map_or(input, |m| m.as_str())
        .trim()
}

/// Per-paper fields recognized on non-title lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `Authors: ...`
    Authors,
    /// `Published: Month Day, Year`
    Published,
    /// `Summary: ...` or `Abstract: ...`
    Summary,
    /// Any arXiv URL on the line.
    Url,
}

/// Field kinds in the order they are tried. A line feeds at most one field.
pub const FIELD_ORDER: [FieldKind; 4] = [
    FieldKind::Authors,
    FieldKind::Published,
    FieldKind::Summary,
    FieldKind::Url,
];

impl FieldKind {
    /// Extracts this field's value from `line`, if present.
    #[must_use]
    pub fn extract(self, line: &str) -> Option<String> {
        match self {
            Self::Authors => AUTHORS_PATTERN
                .captures(line)
                .map(|caps| strip_label_residue(caps.get(1).map_or("", |m| m.as_str()))),
            Self::Published => PUBLISHED_PATTERN
                .captures(line)
                .map(|caps| strip_label_residue(caps.get(1).map_or("", |m| m.as_str()))),
            Self::Summary => SUMMARY_PATTERN
                .captures(line)
                .map(|caps| strip_label_residue(caps.get(1).map_or("", |m| m.as_str()))),
            Self::Url => ARXIV_URL_PATTERN
                .find(line)
                .map(|m| m.as_str().to_string()),
        }
    }

    /// Returns a stable label for logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Published => "published",
            Self::Summary => "summary",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tries every field kind in priority order and returns the first hit.
#[must_use]
pub fn match_field(line: &str) -> Option<(FieldKind, String)> {
    FIELD_ORDER
        .iter()
        .find_map(|&kind| kind.extract(line).map(|value| (kind, value)))
}

/// Drops the `:` / `**` left behind by labels like `**Authors:** ...`.
fn strip_label_residue(value: &str) -> String {
    value
        .trim()
        .trim_start_matches(':')
        .trim_start_matches('*')
        .trim()
        .to_string()
}
