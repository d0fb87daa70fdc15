//! Boundary with the document renderer, plus response rendering.
//!
//! The renderer that parses the binary document and produces HTML is an
//! external collaborator. It is given the raw bytes, a transform hook it
//! calls once per paragraph during its own tree walk, and the style map. It
//! returns the rendered markup and its diagnostic messages.
//!
//! # Example
//!
//! ```
//! use stylenorm::model::DiagnosticMessage;
//! use stylenorm::render::{DocumentRenderer, RenderError, RenderOutput, RenderRequest};
//!
//! /// Renderer that emits one paragraph per line of UTF-8 input.
//! struct LineRenderer;
//!
//! impl DocumentRenderer for LineRenderer {
//!     fn render(&self, bytes: &[u8], request: &RenderRequest<'_>) -> Result<RenderOutput, RenderError> {
//!         let text = std::str::from_utf8(bytes)?;
//!         let mut output = RenderOutput::new(String::new());
//!         for line in text.lines() {
//!             let element = request.transform_paragraph(
//!                 &stylenorm::model::ParagraphElement::new().with_text(line),
//!             );
//!             output.value.push_str(&format!("<p>{}</p>", element.text));
//!         }
//!         output.messages.push(DiagnosticMessage::warning("rendered without styles"));
//!         Ok(output)
//!     }
//! }
//! ```

pub mod html;
mod json;
mod response;

pub use html::complete_html;
pub use json::{to_json, JsonFormat};
pub use response::{ConversionResponse, Response, ResponseFormat};

use crate::model::{DiagnosticMessage, ParagraphElement};
use crate::style_map::StyleMappingTable;

/// Error raised by a renderer; kept as the source of
/// [`Error::ConversionFailure`](crate::Error::ConversionFailure).
pub type RenderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Transform hook called once per paragraph-like element, in document order.
pub type TransformHook<'a> = &'a (dyn Fn(&ParagraphElement) -> ParagraphElement + Send + Sync);

/// Everything the renderer is configured with for one conversion.
#[derive(Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Paragraph transform
    pub transform: TransformHook<'a>,

    /// Ordered style-mapping rules; the first matching rule wins
    pub style_map: &'a StyleMappingTable,
}

impl<'a> RenderRequest<'a> {
    /// Create a render request.
    pub fn new(transform: TransformHook<'a>, style_map: &'a StyleMappingTable) -> Self {
        Self {
            transform,
            style_map,
        }
    }

    /// Apply the transform hook to one element.
    pub fn transform_paragraph(&self, element: &ParagraphElement) -> ParagraphElement {
        (self.transform)(element)
    }
}

impl std::fmt::Debug for RenderRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderRequest")
            .field("style_map", &self.style_map.len())
            .finish_non_exhaustive()
    }
}

/// Markup and diagnostics returned by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Rendered HTML fragment
    pub value: String,

    /// Diagnostics in the order the renderer emitted them
    pub messages: Vec<DiagnosticMessage>,
}

impl RenderOutput {
    /// Create output without diagnostics.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            messages: Vec::new(),
        }
    }

    /// Set the diagnostics.
    pub fn with_messages(mut self, messages: Vec<DiagnosticMessage>) -> Self {
        self.messages = messages;
        self
    }
}

/// The external document renderer.
///
/// Implementations are called once per conversion and must not retain the
/// transform hook past the call.
pub trait DocumentRenderer: Send + Sync {
    /// Name used in log messages.
    fn name(&self) -> &str {
        "renderer"
    }

    /// Render a document, applying the transform hook to every paragraph.
    fn render(&self, bytes: &[u8], request: &RenderRequest<'_>)
        -> Result<RenderOutput, RenderError>;
}
