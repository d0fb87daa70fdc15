//! Response bodies for a finished conversion.

use super::{to_json, JsonFormat};
use crate::convert::ConversionResult;
use crate::diagnostics::SummaryLanguage;
use crate::error::Result;
use serde::Serialize;

/// Shape of the response returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// JSON report with every result field
    #[default]
    Json,
    /// The standalone HTML page only
    Html,
}

impl ResponseFormat {
    /// Pick the format from a `format` query value; anything but `html` is JSON.
    pub fn from_query(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("html") {
            ResponseFormat::Html
        } else {
            ResponseFormat::Json
        }
    }

    /// MIME type of the response body.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Html => "text/html; charset=utf-8",
        }
    }
}

/// JSON body: a status message followed by every result field.
#[derive(Debug, Serialize)]
pub struct ConversionResponse<'a> {
    /// Human-readable success message
    pub message: &'static str,

    /// The conversion result, flattened into the body
    #[serde(flatten)]
    pub result: &'a ConversionResult,
}

/// Rendered response body with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response body
    pub body: String,

    /// MIME type of the body
    pub mime_type: &'static str,
}

impl ConversionResult {
    /// Render the result as a response body.
    pub fn to_response(
        &self,
        format: ResponseFormat,
        language: SummaryLanguage,
        json_format: JsonFormat,
    ) -> Result<Response> {
        let body = match format {
            ResponseFormat::Html => self.complete_html.clone(),
            ResponseFormat::Json => to_json(
                &ConversionResponse {
                    message: language.converted(),
                    result: self,
                },
                json_format,
            )?,
        };

        Ok(Response {
            body,
            mime_type: format.mime_type(),
        })
    }
}
