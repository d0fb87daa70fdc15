//! # stylenorm
//!
//! Paragraph style normalization and diagnostic classification for
//! DOCX-to-HTML conversion.
//!
//! Word documents produced by assorted tools often carry paragraph styles the
//! renderer cannot map: ids like `Style18` or `a9` with no stable meaning, the
//! literal style name `"None"`, or no style at all. This library rewrites those
//! onto a small canonical vocabulary before rendering, supplies the style map
//! that turns canonical styles into HTML, and turns the renderer's free-text
//! warnings into categories and a one-line summary.
//!
//! ## Quick Start
//!
//! ```
//! use stylenorm::model::ParagraphElement;
//!
//! // Normalize a paragraph style
//! let element = stylenorm::resolve(&ParagraphElement::new().with_style_id("24"));
//! assert_eq!(element.style_name(), Some("Заголовок №2"));
//!
//! // Classify renderer warnings
//! let analysis = stylenorm::classify_warnings(&[
//!     "An unrecognised element was ignored: w:tblPrEx",
//! ]);
//! assert_eq!(
//!     stylenorm::summarize_warnings(&analysis),
//!     "Форматирование таблиц проигнорировано (ожидаемо)"
//! );
//! ```
//!
//! ## Features
//!
//! - **Style resolution**: ambiguous, informal and missing styles become
//!   headings, body text or table captions
//! - **Style map**: ordered `selector => tag:fresh` rules for the renderer
//! - **Diagnostics**: warnings sorted into actionable categories
//! - **Conversion**: filename validation, one renderer call, JSON or HTML responses
//! - **Parallel processing**: batch conversion with Rayon
//! - **Async uploads**: `async` feature reads uploads through Tokio

pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod render;
pub mod resolve;
pub mod style_map;

// Re-export commonly used types
pub use convert::{ConversionResult, ConversionStatus, ConvertOptions, Converter, Upload};
pub use diagnostics::{
    CategorizedDiagnostics, DiagnosticCategory, DiagnosticClassifier, StyleInfo, SummaryLanguage,
};
pub use error::{Error, Result};
pub use model::{CanonicalStyle, DiagnosticMessage, MessageKind, ParagraphElement};
pub use render::{
    DocumentRenderer, JsonFormat, RenderError, RenderOutput, RenderRequest, ResponseFormat,
};
pub use resolve::{ResolutionRule, StyleResolver};
pub use style_map::{Grouping, OutputTag, StyleMappingTable, StyleRule};

/// Resolve a paragraph's style with the built-in rules.
///
/// # Example
///
/// ```
/// use stylenorm::{resolve, ParagraphElement};
///
/// let element = resolve(&ParagraphElement::new());
/// assert_eq!(element.style_id(), Some("Normal"));
/// ```
pub fn resolve(element: &ParagraphElement) -> ParagraphElement {
    StyleResolver::new().resolve(element)
}

/// Build the built-in style map.
///
/// # Example
///
/// ```
/// let map = stylenorm::style_map();
/// println!("{}", map.to_style_map());
/// ```
pub fn style_map() -> StyleMappingTable {
    StyleMappingTable::build()
}

/// Sort renderer warnings into categories.
pub fn classify_warnings<S: AsRef<str>>(warnings: &[S]) -> CategorizedDiagnostics {
    DiagnosticClassifier::new().classify(warnings)
}

/// Summarize categorized warnings in Russian.
pub fn summarize_warnings(categorized: &CategorizedDiagnostics) -> String {
    diagnostics::summarize(categorized, SummaryLanguage::Russian)
}
