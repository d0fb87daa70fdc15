//! Paragraph-level element seen by the style transform.

use serde::{Deserialize, Serialize};

/// Style name the upstream parser writes when a paragraph has no style name.
///
/// It arrives as the literal string rather than as a missing value.
pub const ABSENT_STYLE_NAME: &str = "None";

/// A paragraph-like element handed to the transform hook during the
/// renderer's tree walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphElement {
    /// Style id assigned by the source document
    pub style_id: Option<String>,

    /// Human-readable style name; may be the literal `"None"`
    pub style_name: Option<String>,

    /// Text content, carried through untouched
    #[serde(default)]
    pub text: String,
}

impl ParagraphElement {
    /// Create an unstyled paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given style id and name.
    pub fn styled(style_id: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            style_id: Some(style_id.into()),
            style_name: Some(style_name.into()),
            text: String::new(),
        }
    }

    /// Set the style id.
    pub fn with_style_id(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Set the style name.
    pub fn with_style_name(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = Some(style_name.into());
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Copy of this element with a different style, everything else kept.
    pub fn restyled(&self, style_id: &str, style_name: &str) -> Self {
        Self {
            style_id: Some(style_id.to_string()),
            style_name: Some(style_name.to_string()),
            text: self.text.clone(),
        }
    }

    /// Style id, with an empty string treated as absent.
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Style name, with an empty string treated as absent.
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Check if the style name is the upstream absent-marker.
    pub fn has_absent_marker(&self) -> bool {
        self.style_name.as_deref() == Some(ABSENT_STYLE_NAME)
    }

    /// Check if the element carries neither a style id nor a style name.
    pub fn is_unstyled(&self) -> bool {
        self.style_id().is_none() && self.style_name().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_are_absent() {
        let p = ParagraphElement::new().with_style_id("").with_style_name("");
        assert!(p.is_unstyled());
        assert_eq!(p.style_id(), None);
    }

    #[test]
    fn test_absent_marker_is_not_absence() {
        let p = ParagraphElement::new().with_style_name("None");
        assert!(p.has_absent_marker());
        assert!(!p.is_unstyled());
    }

    #[test]
    fn test_restyled_keeps_text() {
        let p = ParagraphElement::styled("ab", "x").with_text("Введение");
        let q = p.restyled("Normal", "Основной текст");

        assert_eq!(q.style_id(), Some("Normal"));
        assert_eq!(q.style_name(), Some("Основной текст"));
        assert_eq!(q.text, "Введение");
    }
}
