//! Style map handed to the renderer.
//!
//! The style map is an ordered list of rules, each saying which output tag a
//! paragraph style name turns into. The renderer applies the first rule whose
//! selector matches, so rule order matters: the canonical names come first,
//! followed by rules for the ids the resolver writes and for legacy names
//! that reach the renderer without going through the resolver.
//!
//! Rules render to the textual form the renderer reads:
//!
//! ```text
//! p[style-name='Заголовок №1'] => h1:fresh
//! p[style-name='Подпись к таблице'] => p.table-caption:fresh
//! ```
//!
//! # Example
//!
//! ```
//! use stylenorm::style_map::StyleMappingTable;
//!
//! let table = StyleMappingTable::build();
//! let rule = table.lookup("Заголовок №2").unwrap();
//! assert_eq!(rule.tag.to_string(), "h2");
//! ```

mod rule;

pub use rule::{Grouping, OutputTag, Selector, StyleRule};

use crate::model::{
    CanonicalStyle, ABSENT_STYLE_NAME, BODY_TEXT_SYNONYMS, OTHER_NAME, TABLE_CAPTION_NAME,
};
use serde::Serialize;
use std::fmt;

/// Which part of a canonical style a rule selects on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleKey {
    Name,
    Id,
}

/// Styles referenced by name in the source document, mapped by their name.
const SPECIAL_STYLES: &[(&str, CanonicalStyle)] = &[
    (TABLE_CAPTION_NAME, CanonicalStyle::TableCaption),
    (OTHER_NAME, CanonicalStyle::Other),
    (ABSENT_STYLE_NAME, CanonicalStyle::BodyText),
];

/// Rules for what the resolver writes, plus legacy names used verbatim.
///
/// The renderer only matches on style names, so the resolver's ids are
/// listed here as names too.
const CANONICAL_RULES: &[(CanonicalStyle, StyleKey)] = &[
    (CanonicalStyle::BodyText, StyleKey::Name),
    (CanonicalStyle::Heading(1), StyleKey::Name),
    (CanonicalStyle::Heading(2), StyleKey::Name),
    (CanonicalStyle::TableCaption, StyleKey::Name),
    (CanonicalStyle::TableCaption, StyleKey::Id),
    (CanonicalStyle::Heading(1), StyleKey::Id),
    (CanonicalStyle::Heading(2), StyleKey::Id),
    (CanonicalStyle::BodyText, StyleKey::Id),
];

/// Ordered style-mapping rules for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleMappingTable {
    rules: Vec<StyleRule>,
}

impl StyleMappingTable {
    /// Build the built-in table.
    pub fn build() -> Self {
        let mut rules = Vec::new();

        for heading in CanonicalStyle::headings() {
            rules.push(StyleRule::for_style(heading.name(), heading));
        }

        for synonym in BODY_TEXT_SYNONYMS {
            rules.push(StyleRule::for_style(*synonym, CanonicalStyle::BodyText));
        }

        for (name, style) in SPECIAL_STYLES {
            rules.push(StyleRule::for_style(*name, *style));
        }

        for (style, key) in CANONICAL_RULES {
            let name = match key {
                StyleKey::Name => style.name(),
                StyleKey::Id => style.id(),
            };
            rules.push(StyleRule::for_style(name, *style));
        }

        Self { rules }
    }

    /// Create a table from explicit rules, in order.
    pub fn from_rules(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }

    /// Put rules in front of the existing ones so they take precedence.
    pub fn with_leading_rules(mut self, leading: Vec<StyleRule>) -> Self {
        if !leading.is_empty() {
            let mut rules = leading;
            rules.append(&mut self.rules);
            self.rules = rules;
        }
        self
    }

    /// Get the rules in order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching a paragraph style name, as the renderer picks it.
    pub fn lookup(&self, style_name: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|rule| rule.matches(style_name))
    }

    /// Check if some rule matches the style name.
    pub fn covers(&self, style_name: &str) -> bool {
        self.lookup(style_name).is_some()
    }

    /// Render the table in the renderer's textual style-map syntax.
    pub fn to_style_map(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for StyleMappingTable {
    fn default() -> Self {
        Self::build()
    }
}

impl fmt::Display for StyleMappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_style_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rule_count() {
        let table = StyleMappingTable::build();
        assert_eq!(table.len(), 23);
        assert!(table.rules().iter().all(|rule| rule.grouping == Grouping::Fresh));
    }

    #[test]
    fn test_heading_rules_first() {
        let table = StyleMappingTable::build();
        let first: Vec<String> = table.rules()[..6].iter().map(|r| r.to_string()).collect();

        assert_eq!(first[0], "p[style-name='Заголовок №1'] => h1:fresh");
        assert_eq!(first[5], "p[style-name='Заголовок №6'] => h6:fresh");
    }

    #[test]
    fn test_special_styles() {
        let table = StyleMappingTable::build();

        assert_eq!(
            table.lookup("Подпись к таблице").unwrap().tag.to_string(),
            "p.table-caption"
        );
        assert_eq!(table.lookup("Другое").unwrap().tag.to_string(), "p.other");
        assert_eq!(table.lookup("None").unwrap().tag.to_string(), "p");
    }

    #[test]
    fn test_body_text_synonyms() {
        let table = StyleMappingTable::build();
        for synonym in BODY_TEXT_SYNONYMS {
            assert_eq!(table.lookup(synonym).unwrap().tag.to_string(), "p");
        }
    }

    #[test]
    fn test_legacy_rules_kept_after_canonical() {
        let table = StyleMappingTable::build();
        let lines: Vec<String> = table.rules().iter().map(|r| r.to_string()).collect();

        let canonical = lines
            .iter()
            .position(|l| l == "p[style-name='Заголовок №1'] => h1:fresh")
            .unwrap();
        let legacy = lines
            .iter()
            .rposition(|l| l == "p[style-name='Заголовок №1'] => h1:fresh")
            .unwrap();
        assert!(legacy > canonical);
        assert_eq!(lines.last().unwrap(), "p[style-name='Normal'] => p:fresh");
    }

    #[test]
    fn test_leading_rules_take_precedence() {
        let custom: StyleRule = "p[style-name='Normal'] => p.lead:fresh".parse().unwrap();
        let table = StyleMappingTable::build().with_leading_rules(vec![custom]);

        assert_eq!(table.len(), 24);
        assert_eq!(table.lookup("Normal").unwrap().tag.to_string(), "p.lead");
    }

    #[test]
    fn test_unknown_style_not_covered() {
        assert!(!StyleMappingTable::build().covers("Style2"));
    }

    #[test]
    fn test_style_map_text() {
        let text = StyleMappingTable::build().to_style_map();
        assert_eq!(text.lines().count(), 23);
        assert!(text.contains("p[style-name='TableCaption'] => p.table-caption:fresh"));
    }
}
