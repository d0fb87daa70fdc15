//! Canonical paragraph style vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical name of the body-text style.
pub const BODY_TEXT_NAME: &str = "Основной текст";

/// Canonical name of the table-caption style.
pub const TABLE_CAPTION_NAME: &str = "Подпись к таблице";

/// Canonical name of the catch-all style.
pub const OTHER_NAME: &str = "Другое";

/// Source spellings that all mean body text.
pub const BODY_TEXT_SYNONYMS: &[&str] = &[
    "Основной текст",
    "Основной текст (2)",
    "Основной текст (3)",
    "Основной текст1",
    "Обычный текст",
    "Normal",
];

/// Deepest heading tier.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// One of the fixed styles paragraphs are normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum CanonicalStyle {
    /// Heading tier 1-6
    Heading(u8),
    /// Body text
    BodyText,
    /// Caption above or below a table
    TableCaption,
    /// Anything else worth keeping visually apart
    Other,
}

impl CanonicalStyle {
    /// Create a heading style, clamping the level to 1-6.
    pub fn heading(level: u8) -> Self {
        CanonicalStyle::Heading(level.clamp(1, MAX_HEADING_LEVEL))
    }

    /// All heading tiers in order.
    pub fn headings() -> impl Iterator<Item = CanonicalStyle> {
        (1..=MAX_HEADING_LEVEL).map(CanonicalStyle::Heading)
    }

    /// Canonical style id (e.g. `Heading1`, `Normal`).
    pub fn id(&self) -> String {
        match self {
            CanonicalStyle::Heading(level) => format!("Heading{}", level),
            CanonicalStyle::BodyText => "Normal".to_string(),
            CanonicalStyle::TableCaption => "TableCaption".to_string(),
            CanonicalStyle::Other => "Other".to_string(),
        }
    }

    /// Canonical human-readable style name (e.g. `Заголовок №1`).
    pub fn name(&self) -> String {
        match self {
            CanonicalStyle::Heading(level) => format!("Заголовок №{}", level),
            CanonicalStyle::BodyText => BODY_TEXT_NAME.to_string(),
            CanonicalStyle::TableCaption => TABLE_CAPTION_NAME.to_string(),
            CanonicalStyle::Other => OTHER_NAME.to_string(),
        }
    }

    /// HTML element the style renders to.
    pub fn element(&self) -> String {
        match self {
            CanonicalStyle::Heading(level) => format!("h{}", level),
            _ => "p".to_string(),
        }
    }

    /// CSS class added to the element, if any.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            CanonicalStyle::TableCaption => Some("table-caption"),
            CanonicalStyle::Other => Some("other"),
            _ => None,
        }
    }

    /// Check if this is a heading tier.
    pub fn is_heading(&self) -> bool {
        matches!(self, CanonicalStyle::Heading(_))
    }
}

impl fmt::Display for CanonicalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
