//! Stub renderers shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use stylenorm::model::{DiagnosticMessage, ParagraphElement};
use stylenorm::render::{DocumentRenderer, RenderError, RenderOutput, RenderRequest};

/// Local file header signature every DOCX (zip) file starts with.
pub const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Renderer for a line-based stand-in format.
///
/// After the zip signature, each line is `style_id|style_name|text`, with
/// empty fields meaning absent. Every paragraph goes through the transform
/// hook, then the style map; paragraphs without a matching rule are emitted
/// as `<p>` with an "Unrecognised paragraph style" warning. Lines starting
/// with `!` are emitted verbatim as diagnostics (`!w ...` warning, `!e ...`
/// error).
#[derive(Default)]
pub struct LineRenderer {
    pub calls: AtomicUsize,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

impl DocumentRenderer for LineRenderer {
    fn name(&self) -> &str {
        "line-renderer"
    }

    fn render(
        &self,
        bytes: &[u8],
        request: &RenderRequest<'_>,
    ) -> Result<RenderOutput, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let body = bytes
            .strip_prefix(ZIP_MAGIC)
            .ok_or("File is not a zip file")?;
        let text = std::str::from_utf8(body)?;

        let mut output = RenderOutput::default();
        for line in text.lines().filter(|l| !l.is_empty()) {
            if let Some(message) = line.strip_prefix("!w ") {
                output.messages.push(DiagnosticMessage::warning(message));
                continue;
            }
            if let Some(message) = line.strip_prefix("!e ") {
                output.messages.push(DiagnosticMessage::error(message));
                continue;
            }

            let mut fields = line.splitn(3, '|');
            let element = ParagraphElement {
                style_id: fields.next().and_then(optional),
                style_name: fields.next().and_then(optional),
                text: fields.next().unwrap_or_default().to_string(),
            };
            let element = request.transform_paragraph(&element);

            let name = element.style_name().unwrap_or_default();
            let tag = match request.style_map.lookup(name) {
                Some(rule) => rule.tag.clone(),
                None => {
                    if let Some(style_name) = element.style_name() {
                        output.messages.push(DiagnosticMessage::warning(format!(
                            "Unrecognised paragraph style: {} (Style ID: {})",
                            style_name,
                            element.style_id().unwrap_or_default()
                        )));
                    }
                    stylenorm::OutputTag::new("p")
                }
            };

            match &tag.class {
                Some(class) => output.value.push_str(&format!(
                    "<{} class=\"{}\">{}</{}>",
                    tag.element, class, element.text, tag.element
                )),
                None => output.value.push_str(&format!(
                    "<{}>{}</{}>",
                    tag.element, element.text, tag.element
                )),
            }
        }

        Ok(output)
    }
}

/// Renderer that returns fixed output without looking at the input.
pub struct FixedRenderer {
    pub output: RenderOutput,
}

impl DocumentRenderer for FixedRenderer {
    fn render(&self, _bytes: &[u8], _request: &RenderRequest<'_>) -> Result<RenderOutput, RenderError> {
        Ok(self.output.clone())
    }
}

/// Build a stand-in document from lines.
pub fn document(lines: &[&str]) -> Vec<u8> {
    let mut bytes = ZIP_MAGIC.to_vec();
    bytes.extend_from_slice(lines.join("\n").as_bytes());
    bytes
}
