//! Paper records produced by the line scanner.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::patterns::FieldKind;

/// Title used when a title line matched but carried no recoverable text.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Placeholder for a missing URL in the tabular projection.
pub const NOT_AVAILABLE: &str = "N/A";

/// One paper mention detected in assistant output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Paper title; never empty.
    pub title: String,
    /// Author list as written in the source line.
    pub authors: String,
    /// Publication date, e.g. `March 3, 2024`.
    pub published: String,
    /// Summary or abstract text.
    pub summary: String,
    /// arXiv link found on a field line.
    pub url: String,
    /// Subject categories. Never populated by the scanner; kept for presenters.
    pub categories: String,
}

/// Records in order of appearance in the source text.
pub type RecordSequence = Vec<Record>;

impl Record {
    /// Opens a record with the given title and all other fields empty.
    ///
    /// Blank titles are replaced with [`UNKNOWN_TITLE`].
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let title = match title.trim() {
            "" => UNKNOWN_TITLE.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            title,
            authors: String::new(),
            published: String::new(),
            summary: String::new(),
            url: String::new(),
            categories: String::new(),
        }
    }

    /// Stores a field value, replacing whatever was there before.
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        let slot = match kind {
            FieldKind::Authors => &mut self.authors,
            FieldKind::Published => &mut self.published,
            FieldKind::Summary => &mut self.summary,
            FieldKind::Url => &mut self.url,
        };
        *slot = value.into();
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.url.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} <{}>", self.title, self.url)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_trims_title() {
        let record = Record::new("  Deep Learning Basics ");
        assert_eq!(record.title, "Deep Learning Basics");
        assert!(record.authors.is_empty());
        assert!(record.url.is_empty());
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_record_new_blank_title_uses_placeholder() {
        assert_eq!(Record::new("").title, UNKNOWN_TITLE);
        assert_eq!(Record::new("   \t").title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_record_set_field_overwrites_previous_value() {
        let mut record = Record::new("Paper");
        record.set_field(FieldKind::Authors, "A. First");
        record.set_field(FieldKind::Authors, "B. Second");
        assert_eq!(record.authors, "B. Second");
    }

    #[test]
    fn test_record_set_field_routes_each_kind() {
        let mut record = Record::new("Paper");
        record.set_field(FieldKind::Published, "March 3, 2024");
        record.set_field(FieldKind::Summary, "Short.");
        record.set_field(FieldKind::Url, "https://arxiv.org/abs/1");
        assert_eq!(record.published, "March 3, 2024");
        assert_eq!(record.summary, "Short.");
        assert_eq!(record.url, "https://arxiv.org/abs/1");
        assert!(record.authors.is_empty());
    }

    #[test]
    fn test_record_display_includes_url_when_present() {
        let mut record = Record::new("Paper");
        assert_eq!(record.to_string(), "Paper");
        record.url = "https://arxiv.org/abs/1".to_string();
        assert_eq!(record.to_string(), "Paper <https://arxiv.org/abs/1>");
    }

    #[test]
    fn test_record_serializes_all_fields() {
        let record = Record::new("Paper");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "Paper");
        assert_eq!(json["categories"], "");
    }
}
