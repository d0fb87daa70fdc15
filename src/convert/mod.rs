//! Conversion of uploaded documents.
//!
//! [`Converter`] wires the style resolver, the style map and the diagnostic
//! classifier around a single call into the external renderer:
//!
//! 1. reject uploads without a filename or with the wrong extension;
//! 2. read the upload;
//! 3. render with the resolver as transform hook and the style map;
//! 4. split diagnostics into warnings and errors and classify the warnings.
//!
//! # Example
//!
//! ```no_run
//! use stylenorm::convert::Converter;
//! # use stylenorm::render::{DocumentRenderer, RenderError, RenderOutput, RenderRequest};
//! # struct MyRenderer;
//! # impl DocumentRenderer for MyRenderer {
//! #     fn render(&self, _: &[u8], _: &RenderRequest<'_>) -> Result<RenderOutput, RenderError> {
//! #         Ok(RenderOutput::new(""))
//! #     }
//! # }
//!
//! fn main() -> stylenorm::Result<()> {
//!     let converter = Converter::new(MyRenderer);
//!     let file = std::fs::File::open("report.docx")?;
//!     let result = converter.convert(file, "report.docx")?;
//!     println!("{}", result.warning_summary);
//!     Ok(())
//! }
//! ```

mod options;
mod result;

pub use options::{ConvertOptions, DEFAULT_EXTENSION};
pub use result::{ConversionResult, ConversionStatus};

use crate::diagnostics::DiagnosticClassifier;
use crate::error::{Error, Result};
use crate::model::split_messages;
use crate::render::{complete_html, DocumentRenderer, RenderRequest};
use crate::resolve::StyleResolver;
use crate::style_map::StyleMappingTable;
use rayon::prelude::*;
use std::io::Read;
use std::sync::Arc;

/// An in-memory upload for batch conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Uploaded filename
    pub filename: String,

    /// File content
    pub content: Vec<u8>,
}

impl Upload {
    /// Create an upload.
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Converts uploaded documents through an external renderer.
///
/// The converter is immutable after construction; share one instance across
/// threads or requests.
#[derive(Clone)]
pub struct Converter {
    renderer: Arc<dyn DocumentRenderer>,
    resolver: StyleResolver,
    style_map: StyleMappingTable,
    classifier: DiagnosticClassifier,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new<R: DocumentRenderer + 'static>(renderer: R) -> Self {
        Self::with_options(Arc::new(renderer), ConvertOptions::default())
    }

    /// Create a converter around a shared renderer with custom options.
    pub fn with_options(renderer: Arc<dyn DocumentRenderer>, options: ConvertOptions) -> Self {
        let style_map = StyleMappingTable::build().with_leading_rules(options.extra_rules.clone());
        let classifier = DiagnosticClassifier::new().with_language(options.language);

        Self {
            renderer,
            resolver: StyleResolver::new(),
            style_map,
            classifier,
            options,
        }
    }

    /// Options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Style map handed to the renderer.
    pub fn style_map(&self) -> &StyleMappingTable {
        &self.style_map
    }

    /// Reject a filename that is empty or lacks the required extension.
    pub fn validate_filename(&self, filename: &str) -> Result<()> {
        if filename.is_empty() {
            return Err(Error::InvalidInput("No file selected".to_string()));
        }

        if !self.options.accepts_filename(filename) {
            return Err(Error::InvalidInput(format!(
                "Only {} files are supported",
                self.options.required_extension.to_uppercase()
            )));
        }

        Ok(())
    }

    /// Validate the filename, read the upload and convert it.
    ///
    /// Nothing is read from `upload` when the filename is rejected.
    pub fn convert<R: Read>(&self, mut upload: R, filename: &str) -> Result<ConversionResult> {
        self.validate_filename(filename)?;

        let mut content = Vec::new();
        upload.read_to_end(&mut content)?;

        self.render_validated(&content, filename)
    }

    /// Validate the filename, read the upload asynchronously and convert it.
    #[cfg(feature = "async")]
    pub async fn convert_async<R>(&self, mut upload: R, filename: &str) -> Result<ConversionResult>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        use tokio::io::AsyncReadExt;

        self.validate_filename(filename)?;

        let mut content = Vec::new();
        upload.read_to_end(&mut content).await?;

        self.render_validated(&content, filename)
    }

    /// Convert an upload already held in memory.
    pub fn convert_bytes(&self, content: &[u8], filename: &str) -> Result<ConversionResult> {
        self.validate_filename(filename)?;
        self.render_validated(content, filename)
    }

    /// Convert independent uploads in parallel; results keep input order.
    pub fn convert_batch(&self, uploads: &[Upload]) -> Vec<Result<ConversionResult>> {
        uploads
            .par_iter()
            .map(|upload| self.convert_bytes(&upload.content, &upload.filename))
            .collect()
    }

    fn render_validated(&self, content: &[u8], filename: &str) -> Result<ConversionResult> {
        log::info!(
            "Converting {} ({} bytes) with {}",
            filename,
            content.len(),
            self.renderer.name()
        );

        let transform = self.resolver.transform();
        let request = RenderRequest::new(&transform, &self.style_map);

        let output = self.renderer.render(content, &request).map_err(|e| {
            log::warn!("Rendering {} failed: {}", filename, e);
            Error::ConversionFailure(e)
        })?;

        let (warnings, errors) = split_messages(&output.messages);
        let style_analysis = self.classifier.classify(&warnings);
        let warning_summary = self.classifier.summarize(&style_analysis);
        let status = ConversionStatus::from_error_count(errors.len());

        log::info!(
            "Converted {}: {} warnings, {} errors, status {}",
            filename,
            warnings.len(),
            errors.len(),
            status
        );
        for error in &errors {
            log::debug!("Renderer error in {}: {}", filename, error);
        }

        let complete_html = complete_html(&output.value, filename, self.options.language);

        Ok(ConversionResult {
            original_filename: filename.to_string(),
            file_size: content.len(),
            html_content: output.value,
            complete_html,
            warnings_count: warnings.len(),
            errors_count: errors.len(),
            conversion_warnings: warnings,
            conversion_errors: errors,
            style_analysis,
            warning_summary,
            status,
        })
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("renderer", &self.renderer.name())
            .field("style_map", &self.style_map.len())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiagnosticMessage;
    use crate::render::{RenderError, RenderOutput};

    struct EchoRenderer;

    impl DocumentRenderer for EchoRenderer {
        fn render(&self, bytes: &[u8], _: &RenderRequest<'_>) -> std::result::Result<RenderOutput, RenderError> {
            Ok(RenderOutput::new(String::from_utf8_lossy(bytes).into_owned())
                .with_messages(vec![DiagnosticMessage::error("Unsupported image format")]))
        }
    }

    #[test]
    fn test_validate_filename() {
        let converter = Converter::new(EchoRenderer);
        assert!(converter.validate_filename("a.docx").is_ok());
        assert!(converter.validate_filename("").unwrap_err().is_invalid_input());

        let err = converter.validate_filename("a.pdf").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Only DOCX files are supported");
    }

    #[test]
    fn test_errors_mark_status() {
        let result = Converter::new(EchoRenderer)
            .convert_bytes(b"<p>x</p>", "a.docx")
            .unwrap();

        assert_eq!(result.status, ConversionStatus::SuccessWithErrors);
        assert_eq!(result.errors_count, 1);
        assert_eq!(result.warnings_count, 0);
        assert_eq!(result.html_content, "<p>x</p>");
    }

    #[test]
    fn test_extra_rules_lead_style_map() {
        let rule = "p[style-name='Normal'] => p.body:fresh".parse().unwrap();
        let options = ConvertOptions::new().with_rule(rule);
        let converter = Converter::with_options(Arc::new(EchoRenderer), options);

        assert_eq!(converter.style_map().len(), 24);
        assert_eq!(
            converter.style_map().lookup("Normal").unwrap().tag.to_string(),
            "p.body"
        );
    }
}
