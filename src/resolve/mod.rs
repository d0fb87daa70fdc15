//! Resolution of ambiguous paragraph styles.
//!
//! Source documents often carry style ids with no stable meaning across
//! documents (`Style2`, `a9`, `11`, ...) or no style at all. The renderer
//! cannot map those, so the resolver rewrites them onto the canonical
//! vocabulary before the style map is applied.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. The style id is in the ambiguous set: `11` and `24` become heading
//!    tiers 1 and 2, `a9` becomes a table caption, anything else body text.
//! 2. The style name is the literal `"None"` and the id is one of the
//!    informal ids: body text.
//! 3. Neither id nor name is set: body text.
//!
//! Everything else passes through unchanged.
//!
//! # Example
//!
//! ```
//! use stylenorm::model::ParagraphElement;
//! use stylenorm::resolve::StyleResolver;
//!
//! let resolver = StyleResolver::new();
//! let resolved = resolver.resolve(&ParagraphElement::new().with_style_id("11"));
//! assert_eq!(resolved.style_id(), Some("Heading1"));
//! assert_eq!(resolved.style_name(), Some("Заголовок №1"));
//! ```

use crate::model::{CanonicalStyle, ParagraphElement};
use serde::Serialize;

/// Style ids with no stable meaning that are always rewritten.
pub const AMBIGUOUS_STYLE_IDS: &[&str] = &[
    "Style2", "Style4", "Style18", "20", "1", "a9", "ab", "24", "11", "30",
];

/// Informally defined style ids that show up with the `"None"` style name.
///
/// All of them are also ambiguous ids, so rule 1 claims them first.
pub const INFORMAL_STYLE_IDS: &[&str] = &["Style2", "Style4", "Style18"];

/// Ambiguous ids with a fixed meaning; the rest of the set is body text.
pub const FIXED_ID_STYLES: &[(&str, CanonicalStyle)] = &[
    ("11", CanonicalStyle::Heading(1)),
    ("24", CanonicalStyle::Heading(2)),
    ("a9", CanonicalStyle::TableCaption),
];

/// Which resolution rule rewrote an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    /// Style id is in the ambiguous set
    AmbiguousId,
    /// Style name is `"None"` and the id is informal
    AbsentNameInformalId,
    /// No style id and no style name
    Unstyled,
}

/// Outcome of resolving one element, with the rule that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The (possibly rewritten) element
    pub element: ParagraphElement,

    /// Rule and canonical style applied, `None` when passed through
    pub applied: Option<(ResolutionRule, CanonicalStyle)>,
}

impl Resolution {
    /// Check if the element was rewritten.
    pub fn is_rewritten(&self) -> bool {
        self.applied.is_some()
    }
}

/// Rewrites ambiguous or missing paragraph styles onto the canonical vocabulary.
///
/// The resolver is immutable and can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver {
    ambiguous_ids: &'static [&'static str],
    informal_ids: &'static [&'static str],
    fixed_styles: &'static [(&'static str, CanonicalStyle)],
}

impl StyleResolver {
    /// Create a resolver with the built-in rule tables.
    pub fn new() -> Self {
        Self {
            ambiguous_ids: AMBIGUOUS_STYLE_IDS,
            informal_ids: INFORMAL_STYLE_IDS,
            fixed_styles: FIXED_ID_STYLES,
        }
    }

    /// Check if a style id is in the ambiguous set.
    pub fn is_ambiguous(&self, style_id: &str) -> bool {
        self.ambiguous_ids.iter().any(|id| *id == style_id)
    }

    /// Check if a style id is in the informal set.
    pub fn is_informal(&self, style_id: &str) -> bool {
        self.informal_ids.iter().any(|id| *id == style_id)
    }

    /// Find the rule and canonical style for an element, if any applies.
    pub fn classify(&self, element: &ParagraphElement) -> Option<(ResolutionRule, CanonicalStyle)> {
        if let Some(id) = element.style_id().filter(|id| self.is_ambiguous(id)) {
            let style = self
                .fixed_styles
                .iter()
                .find(|(fixed, _)| *fixed == id)
                .map(|(_, style)| *style)
                .unwrap_or(CanonicalStyle::BodyText);
            return Some((ResolutionRule::AmbiguousId, style));
        }

        if element.has_absent_marker() {
            if let Some(id) = element.style_id() {
                if self.is_informal(id) {
                    return Some((ResolutionRule::AbsentNameInformalId, CanonicalStyle::BodyText));
                }
            }
        }

        if element.is_unstyled() {
            return Some((ResolutionRule::Unstyled, CanonicalStyle::BodyText));
        }

        None
    }

    /// Resolve an element and report which rule fired.
    pub fn resolve_traced(&self, element: &ParagraphElement) -> Resolution {
        match self.classify(element) {
            Some((rule, style)) => {
                log::trace!(
                    "Resolved paragraph style {:?}/{:?} to {} via {:?}",
                    element.style_id,
                    element.style_name,
                    style,
                    rule
                );
                Resolution {
                    element: element.restyled(&style.id(), &style.name()),
                    applied: Some((rule, style)),
                }
            }
            None => Resolution {
                element: element.clone(),
                applied: None,
            },
        }
    }

    /// Resolve an element to its canonical style, or return it unchanged.
    pub fn resolve(&self, element: &ParagraphElement) -> ParagraphElement {
        self.resolve_traced(element).element
    }

    /// The transform hook handed to the renderer.
    pub fn transform(&self) -> impl Fn(&ParagraphElement) -> ParagraphElement + Send + Sync + '_ {
        move |element| self.resolve(element)
    }

    /// Every canonical style the resolver can produce.
    pub fn outputs(&self) -> Vec<CanonicalStyle> {
        let mut outputs: Vec<CanonicalStyle> =
            self.fixed_styles.iter().map(|(_, style)| *style).collect();
        outputs.push(CanonicalStyle::BodyText);
        outputs
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}
