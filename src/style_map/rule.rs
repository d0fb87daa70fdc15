//! Single style-mapping rule and its textual syntax.

use crate::error::{Error, Result};
use crate::model::CanonicalStyle;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const SELECTOR_PREFIX: &str = "p[style-name='";
const SELECTOR_SUFFIX: &str = "']";
const FRESH_SUFFIX: &str = ":fresh";

/// Which paragraphs a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Selector {
    /// Paragraphs whose style name equals the value
    ParagraphStyleName(String),
}

impl Selector {
    /// Check if the selector matches a paragraph with the given style name.
    pub fn matches(&self, style_name: &str) -> bool {
        match self {
            Selector::ParagraphStyleName(name) => name == style_name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::ParagraphStyleName(name) => {
                write!(f, "{}{}{}", SELECTOR_PREFIX, name, SELECTOR_SUFFIX)
            }
        }
    }
}

/// Output element with an optional CSS class, e.g. `p.table-caption`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputTag {
    /// HTML element name
    pub element: String,

    /// CSS class
    pub class: Option<String>,
}

impl OutputTag {
    /// Create a tag without a class.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            class: None,
        }
    }

    /// Set the CSS class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Output tag for a canonical style.
    pub fn for_style(style: CanonicalStyle) -> Self {
        let tag = Self::new(style.element());
        match style.css_class() {
            Some(class) => tag.with_class(class),
            None => tag,
        }
    }
}

impl fmt::Display for OutputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "{}.{}", self.element, class),
            None => f.write_str(&self.element),
        }
    }
}

/// How consecutive paragraphs with the same style are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Every paragraph opens a new output block
    #[default]
    Fresh,
    /// The renderer may merge the paragraph into the previous block
    Merge,
}

/// One `selector => tag` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    /// Paragraphs the rule applies to
    pub selector: Selector,

    /// Output tag
    pub tag: OutputTag,

    /// Grouping mode
    pub grouping: Grouping,
}

impl StyleRule {
    /// Create a rule with fresh grouping.
    pub fn new(selector: Selector, tag: OutputTag) -> Self {
        Self {
            selector,
            tag,
            grouping: Grouping::Fresh,
        }
    }

    /// Rule mapping a style name to the output tag of a canonical style.
    pub fn for_style(style_name: impl Into<String>, style: CanonicalStyle) -> Self {
        Self::new(
            Selector::ParagraphStyleName(style_name.into()),
            OutputTag::for_style(style),
        )
    }

    /// Set the grouping mode.
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Check if the rule applies to a paragraph with the given style name.
    pub fn matches(&self, style_name: &str) -> bool {
        self.selector.matches(style_name)
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.selector, self.tag)?;
        if self.grouping == Grouping::Fresh {
            f.write_str(FRESH_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for StyleRule {
    type Err = Error;

    /// Parse `p[style-name='NAME'] => element(.class)?(:fresh)?`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidStyleRule(format!("{}: {}", reason, s.trim()));

        let (lhs, rhs) = s
            .split_once("=>")
            .ok_or_else(|| invalid("missing '=>'"))?;

        let name = lhs
            .trim()
            .strip_prefix(SELECTOR_PREFIX)
            .and_then(|rest| rest.strip_suffix(SELECTOR_SUFFIX))
            .ok_or_else(|| invalid("expected p[style-name='...'] selector"))?;
        if name.is_empty() || name.contains('\'') {
            return Err(invalid("bad style name"));
        }

        let rhs = rhs.trim();
        let (tag, grouping) = match rhs.strip_suffix(FRESH_SUFFIX) {
            Some(tag) => (tag, Grouping::Fresh),
            None => (rhs, Grouping::Merge),
        };

        let (element, class) = match tag.split_once('.') {
            Some((element, class)) => (element, Some(class)),
            None => (tag, None),
        };
        let is_ident = |part: &str| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        if !is_ident(element) || !class.map_or(true, is_ident) {
            return Err(invalid("bad output tag"));
        }

        let mut output = OutputTag::new(element);
        if let Some(class) = class {
            output = output.with_class(class);
        }

        Ok(StyleRule::new(Selector::ParagraphStyleName(name.to_string()), output)
            .with_grouping(grouping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = StyleRule::for_style("Подпись к таблице", CanonicalStyle::TableCaption);
        assert_eq!(
            rule.to_string(),
            "p[style-name='Подпись к таблице'] => p.table-caption:fresh"
        );
    }

    #[test]
    fn test_parse_rule() {
        let rule: StyleRule = "p[style-name='Заголовок №3'] => h3:fresh".parse().unwrap();
        assert!(rule.matches("Заголовок №3"));
        assert_eq!(rule.tag, OutputTag::new("h3"));
        assert_eq!(rule.grouping, Grouping::Fresh);
    }

    #[test]
    fn test_parse_rule_with_class_without_fresh() {
        let rule: StyleRule = "  p[style-name='Цитата'] =>  blockquote.quote ".parse().unwrap();
        assert_eq!(rule.tag, OutputTag::new("blockquote").with_class("quote"));
        assert_eq!(rule.grouping, Grouping::Merge);
        assert_eq!(rule.to_string(), "p[style-name='Цитата'] => blockquote.quote");
    }

    #[test]
    fn test_parse_rule_errors() {
        for bad in [
            "p[style-name='Normal']",
            "r[style-name='Normal'] => p",
            "p[style-name=''] => p",
            "p[style-name='Normal'] => :fresh",
            "p[style-name='Normal'] => p.:fresh",
            "p[style-name='Normal'] => h 1",
        ] {
            let err = bad.parse::<StyleRule>().unwrap_err();
            assert!(matches!(err, Error::InvalidStyleRule(_)), "{}", bad);
        }
    }
}
