//! Conversion options.

use crate::diagnostics::SummaryLanguage;
use crate::style_map::StyleRule;

/// Extension uploads must carry, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "docx";

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Required filename extension, lowercase without the leading dot
    pub required_extension: String,

    /// Mapping rules placed before the built-in table
    pub extra_rules: Vec<StyleRule>,

    /// Language of the summary, success message and page `lang` attribute
    pub language: SummaryLanguage,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required filename extension.
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.required_extension = extension
            .as_ref()
            .trim_start_matches('.')
            .to_lowercase();
        self
    }

    /// Add a mapping rule ahead of the built-in table.
    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.extra_rules.push(rule);
        self
    }

    /// Set the mapping rules placed ahead of the built-in table.
    pub fn with_rules(mut self, rules: Vec<StyleRule>) -> Self {
        self.extra_rules = rules;
        self
    }

    /// Set the language for user-facing texts.
    pub fn with_language(mut self, language: SummaryLanguage) -> Self {
        self.language = language;
        self
    }

    /// Check if a filename carries the required extension (case-insensitive).
    pub fn accepts_filename(&self, filename: &str) -> bool {
        filename
            .to_lowercase()
            .ends_with(&format!(".{}", self.required_extension))
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            required_extension: DEFAULT_EXTENSION.to_string(),
            extra_rules: Vec::new(),
            language: SummaryLanguage::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let rule = "p[style-name='Цитата'] => blockquote:fresh".parse().unwrap();
        let options = ConvertOptions::new()
            .with_extension(".DOCM")
            .with_rule(rule)
            .with_language(SummaryLanguage::English);

        assert_eq!(options.required_extension, "docm");
        assert_eq!(options.extra_rules.len(), 1);
        assert_eq!(options.language, SummaryLanguage::English);
    }

    #[test]
    fn test_accepts_filename() {
        let options = ConvertOptions::default();
        assert!(options.accepts_filename("report.docx"));
        assert!(options.accepts_filename("REPORT.DOCX"));
        assert!(!options.accepts_filename("report.doc"));
        assert!(!options.accepts_filename("docx"));
        assert!(!options.accepts_filename("report.docx.pdf"));
    }
}
