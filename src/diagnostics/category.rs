//! Diagnostic categories and the categorized message buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a renderer warning is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    /// A style id was referenced but never defined
    UndefinedStyleReference,
    /// A paragraph style had no mapping rule
    UnrecognizedParagraphStyle,
    /// An unrecognised element was dropped
    MissingElementIgnored,
    /// Table property exceptions were dropped; expected and harmless
    TableFormattingIgnored,
    /// Anything else
    Other,
}

impl DiagnosticCategory {
    /// All categories in reporting order.
    pub const ALL: [DiagnosticCategory; 5] = [
        DiagnosticCategory::UndefinedStyleReference,
        DiagnosticCategory::UnrecognizedParagraphStyle,
        DiagnosticCategory::MissingElementIgnored,
        DiagnosticCategory::TableFormattingIgnored,
        DiagnosticCategory::Other,
    ];

    /// Key used for the category in JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            DiagnosticCategory::UndefinedStyleReference => "undefined_styles",
            DiagnosticCategory::UnrecognizedParagraphStyle => "unrecognized_styles",
            DiagnosticCategory::MissingElementIgnored => "missing_elements",
            DiagnosticCategory::TableFormattingIgnored => "table_formatting_ignored",
            DiagnosticCategory::Other => "other_warnings",
        }
    }

    /// Check if messages in this category call for user action.
    pub fn is_actionable(&self) -> bool {
        !matches!(
            self,
            DiagnosticCategory::TableFormattingIgnored | DiagnosticCategory::Other
        )
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Renderer warnings sorted into fixed categories, each keeping input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedDiagnostics {
    /// Undefined style references
    pub undefined_styles: Vec<String>,

    /// Unrecognized paragraph styles
    pub unrecognized_styles: Vec<String>,

    /// Ignored elements other than table property exceptions
    pub missing_elements: Vec<String>,

    /// Ignored table property exceptions
    pub table_formatting_ignored: Vec<String>,

    /// Uncategorized warnings
    pub other_warnings: Vec<String>,
}

impl CategorizedDiagnostics {
    /// Create empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in a category.
    pub fn get(&self, category: DiagnosticCategory) -> &[String] {
        match category {
            DiagnosticCategory::UndefinedStyleReference => &self.undefined_styles,
            DiagnosticCategory::UnrecognizedParagraphStyle => &self.unrecognized_styles,
            DiagnosticCategory::MissingElementIgnored => &self.missing_elements,
            DiagnosticCategory::TableFormattingIgnored => &self.table_formatting_ignored,
            DiagnosticCategory::Other => &self.other_warnings,
        }
    }

    fn bucket_mut(&mut self, category: DiagnosticCategory) -> &mut Vec<String> {
        match category {
            DiagnosticCategory::UndefinedStyleReference => &mut self.undefined_styles,
            DiagnosticCategory::UnrecognizedParagraphStyle => &mut self.unrecognized_styles,
            DiagnosticCategory::MissingElementIgnored => &mut self.missing_elements,
            DiagnosticCategory::TableFormattingIgnored => &mut self.table_formatting_ignored,
            DiagnosticCategory::Other => &mut self.other_warnings,
        }
    }

    /// Append a message to a category.
    pub fn push(&mut self, category: DiagnosticCategory, message: impl Into<String>) {
        self.bucket_mut(category).push(message.into());
    }

    /// Number of messages in a category.
    pub fn count(&self, category: DiagnosticCategory) -> usize {
        self.get(category).len()
    }

    /// Total number of messages across all categories.
    pub fn total(&self) -> usize {
        DiagnosticCategory::ALL
            .iter()
            .map(|category| self.count(*category))
            .sum()
    }

    /// Check if every category is empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over categories with their messages, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (DiagnosticCategory, &[String])> + '_ {
        DiagnosticCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Category a message text was placed in, if present.
    pub fn category_of(&self, message: &str) -> Option<DiagnosticCategory> {
        self.iter()
            .find(|(_, messages)| messages.iter().any(|m| m == message))
            .map(|(category, _)| category)
    }
}
