//! Classification of renderer warnings.
//!
//! The renderer reports problems as free-text messages. The classifier sorts
//! each warning into exactly one [`DiagnosticCategory`] by looking for fixed
//! phrases, first match wins:
//!
//! | Phrase                                                | Category                     |
//! |-------------------------------------------------------|------------------------------|
//! | `was referenced but not defined`                      | undefined style reference    |
//! | `Unrecognised paragraph style`                        | unrecognized paragraph style |
//! | `unrecognised element was ignored` + `w:tblPrEx`      | table formatting ignored     |
//! | `unrecognised element was ignored`                    | missing element ignored      |
//! | anything else                                         | other                        |
//!
//! # Example
//!
//! ```
//! use stylenorm::diagnostics::{DiagnosticCategory, DiagnosticClassifier};
//!
//! let classifier = DiagnosticClassifier::new();
//! let categorized = classifier.classify(&[
//!     "Paragraph style with ID Style18 was referenced but not defined in the document",
//!     "An unrecognised element was ignored: w:tblPrEx",
//! ]);
//! assert_eq!(categorized.count(DiagnosticCategory::UndefinedStyleReference), 1);
//! assert_eq!(categorized.count(DiagnosticCategory::TableFormattingIgnored), 1);
//! ```

mod category;
mod summary;

pub use category::{CategorizedDiagnostics, DiagnosticCategory};
pub use summary::{summarize, SummaryLanguage};

use regex::Regex;
use serde::Serialize;

/// Phrase marking a style id that was referenced but never defined.
pub const UNDEFINED_STYLE_MARKER: &str = "was referenced but not defined";

/// Phrase marking a paragraph style without a mapping rule.
pub const UNRECOGNIZED_STYLE_MARKER: &str = "Unrecognised paragraph style";

/// Phrase marking an element the renderer dropped.
pub const IGNORED_ELEMENT_MARKER: &str = "unrecognised element was ignored";

/// Table property exception element; dropping it only loses table formatting.
pub const TABLE_PROPERTIES_EXCEPTION_MARKER: &str = "w:tblPrEx";

/// Placeholder for style details a message does not carry.
pub const UNKNOWN: &str = "Unknown";

/// A phrase and the category it selects, with optional refinements that
/// override the category when they also appear.
struct ClassificationRule {
    marker: &'static str,
    category: DiagnosticCategory,
    refinements: &'static [(&'static str, DiagnosticCategory)],
}

const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        marker: UNDEFINED_STYLE_MARKER,
        category: DiagnosticCategory::UndefinedStyleReference,
        refinements: &[],
    },
    ClassificationRule {
        marker: UNRECOGNIZED_STYLE_MARKER,
        category: DiagnosticCategory::UnrecognizedParagraphStyle,
        refinements: &[],
    },
    ClassificationRule {
        marker: IGNORED_ELEMENT_MARKER,
        category: DiagnosticCategory::MissingElementIgnored,
        refinements: &[(
            TABLE_PROPERTIES_EXCEPTION_MARKER,
            DiagnosticCategory::TableFormattingIgnored,
        )],
    },
];

const UNRECOGNIZED_STYLE_PATTERN: &str = r"Unrecognised paragraph style: (.+?) \(Style ID: (.+?)\)";
const UNDEFINED_STYLE_PATTERN: &str = r"Paragraph style with ID (.+?) was referenced";

/// Style details pulled out of a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleInfo {
    /// Style name, or `Unknown`
    pub style_name: String,

    /// Style id, or `Unknown`
    pub style_id: String,
}

impl StyleInfo {
    /// Style info with both fields unknown.
    pub fn unknown() -> Self {
        Self {
            style_name: UNKNOWN.to_string(),
            style_id: UNKNOWN.to_string(),
        }
    }

    /// Check if neither field could be extracted.
    pub fn is_unknown(&self) -> bool {
        self.style_name == UNKNOWN && self.style_id == UNKNOWN
    }
}

/// Sorts renderer warnings into categories and summarizes them.
#[derive(Debug, Clone)]
pub struct DiagnosticClassifier {
    language: SummaryLanguage,
    unrecognized_style_regex: Regex,
    undefined_style_regex: Regex,
}

impl DiagnosticClassifier {
    /// Create a classifier with Russian summaries.
    pub fn new() -> Self {
        Self {
            language: SummaryLanguage::default(),
            unrecognized_style_regex: Regex::new(UNRECOGNIZED_STYLE_PATTERN).unwrap(),
            undefined_style_regex: Regex::new(UNDEFINED_STYLE_PATTERN).unwrap(),
        }
    }

    /// Set the summary language.
    pub fn with_language(mut self, language: SummaryLanguage) -> Self {
        self.language = language;
        self
    }

    /// Summary language in use.
    pub fn language(&self) -> SummaryLanguage {
        self.language
    }

    /// Category for a single message.
    pub fn categorize(&self, message: &str) -> DiagnosticCategory {
        CLASSIFICATION_RULES
            .iter()
            .find(|rule| message.contains(rule.marker))
            .map(|rule| {
                rule.refinements
                    .iter()
                    .find(|(marker, _)| message.contains(marker))
                    .map(|(_, category)| *category)
                    .unwrap_or(rule.category)
            })
            .unwrap_or(DiagnosticCategory::Other)
    }

    /// Sort warnings into categories. Every message lands in exactly one.
    pub fn classify<S: AsRef<str>>(&self, messages: &[S]) -> CategorizedDiagnostics {
        let mut categorized = CategorizedDiagnostics::new();
        for message in messages {
            let message = message.as_ref();
            categorized.push(self.categorize(message), message);
        }
        categorized
    }

    /// Pull the style name and id out of a warning, best effort.
    pub fn extract_style_info(&self, message: &str) -> StyleInfo {
        if let Some(caps) = self.unrecognized_style_regex.captures(message) {
            return StyleInfo {
                style_name: caps[1].to_string(),
                style_id: caps[2].to_string(),
            };
        }

        if let Some(caps) = self.undefined_style_regex.captures(message) {
            return StyleInfo {
                style_name: UNKNOWN.to_string(),
                style_id: caps[1].to_string(),
            };
        }

        StyleInfo::unknown()
    }

    /// Style info for every undefined or unrecognized style warning.
    pub fn extract_all(&self, categorized: &CategorizedDiagnostics) -> Vec<StyleInfo> {
        categorized
            .undefined_styles
            .iter()
            .chain(categorized.unrecognized_styles.iter())
            .map(|message| self.extract_style_info(message))
            .collect()
    }

    /// One-line summary of categorized warnings.
    pub fn summarize(&self, categorized: &CategorizedDiagnostics) -> String {
        summarize(categorized, self.language)
    }
}

impl Default for DiagnosticClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNDEFINED: &str =
        "Paragraph style with ID Style18 was referenced but not defined in the document";
    const UNRECOGNIZED: &str =
        "Unrecognised paragraph style: Основной текст (4) (Style ID: 25)";
    const TABLE_EXCEPTION: &str = "An unrecognised element was ignored: w:tblPrEx";
    const IGNORED: &str = "An unrecognised element was ignored: v:shape";

    #[test]
    fn test_categorize_each_rule() {
        let classifier = DiagnosticClassifier::new();
        assert_eq!(
            classifier.categorize(UNDEFINED),
            DiagnosticCategory::UndefinedStyleReference
        );
        assert_eq!(
            classifier.categorize(UNRECOGNIZED),
            DiagnosticCategory::UnrecognizedParagraphStyle
        );
        assert_eq!(
            classifier.categorize(TABLE_EXCEPTION),
            DiagnosticCategory::TableFormattingIgnored
        );
        assert_eq!(
            classifier.categorize(IGNORED),
            DiagnosticCategory::MissingElementIgnored
        );
        assert_eq!(
            classifier.categorize("Image of type image/x-emf is unlikely to display"),
            DiagnosticCategory::Other
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let message = format!("{} / {}", UNDEFINED, IGNORED);
        assert_eq!(
            DiagnosticClassifier::new().categorize(&message),
            DiagnosticCategory::UndefinedStyleReference
        );
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(
            DiagnosticClassifier::new().categorize("unrecognised paragraph style: X"),
            DiagnosticCategory::Other
        );
    }

    #[test]
    fn test_classify_keeps_order() {
        let categorized =
            DiagnosticClassifier::new().classify(&[IGNORED, "other", "An unrecognised element was ignored: w:sdt"]);

        assert_eq!(
            categorized.missing_elements,
            vec![IGNORED, "An unrecognised element was ignored: w:sdt"]
        );
        assert_eq!(categorized.other_warnings, vec!["other"]);
    }

    #[test]
    fn test_extract_unrecognized_style() {
        let info = DiagnosticClassifier::new().extract_style_info(UNRECOGNIZED);
        assert_eq!(info.style_name, "Основной текст (4)");
        assert_eq!(info.style_id, "25");
    }

    #[test]
    fn test_extract_undefined_style() {
        let info = DiagnosticClassifier::new().extract_style_info(UNDEFINED);
        assert_eq!(info.style_id, "Style18");
        assert_eq!(info.style_name, "Unknown");
    }

    #[test]
    fn test_extract_unknown() {
        let info = DiagnosticClassifier::new().extract_style_info(TABLE_EXCEPTION);
        assert!(info.is_unknown());
    }

    #[test]
    fn test_extract_all() {
        let classifier = DiagnosticClassifier::new();
        let categorized = classifier.classify(&[UNDEFINED, TABLE_EXCEPTION, UNRECOGNIZED]);
        let infos = classifier.extract_all(&categorized);

        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].style_id, "Style18");
        assert_eq!(infos[1].style_id, "25");
    }

    #[test]
    fn test_summarize_two_clauses() {
        let classifier = DiagnosticClassifier::new();
        let categorized = classifier.classify(&[UNDEFINED, UNRECOGNIZED]);

        assert_eq!(
            classifier.summarize(&categorized),
            "Неопределенные стили: 1; Нераспознанные стили: 1"
        );
    }
}
