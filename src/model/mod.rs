//! Document model types shared with the renderer.
//!
//! The renderer owns the element tree; this module only describes the parts
//! of it that style normalization and diagnostic handling look at.

mod diagnostic;
mod paragraph;
mod style;

pub use diagnostic::{split_messages, DiagnosticMessage, MessageKind};
pub use paragraph::{ParagraphElement, ABSENT_STYLE_NAME};
pub use style::{
    CanonicalStyle, BODY_TEXT_NAME, BODY_TEXT_SYNONYMS, MAX_HEADING_LEVEL, OTHER_NAME,
    TABLE_CAPTION_NAME,
};
