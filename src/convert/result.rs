//! Conversion result record.

use crate::diagnostics::CategorizedDiagnostics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall outcome of a conversion that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatus {
    /// No error diagnostics
    Success,
    /// Rendered, but the renderer reported errors
    SuccessWithErrors,
}

impl ConversionStatus {
    /// Status for a conversion with the given number of error diagnostics.
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            ConversionStatus::Success
        } else {
            ConversionStatus::SuccessWithErrors
        }
    }
}

impl fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionStatus::Success => f.write_str("success"),
            ConversionStatus::SuccessWithErrors => f.write_str("success_with_errors"),
        }
    }
}

/// Result of converting one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Uploaded filename
    pub original_filename: String,

    /// Size of the upload in bytes
    pub file_size: usize,

    /// Rendered HTML fragment
    pub html_content: String,

    /// Fragment wrapped in a standalone page
    pub complete_html: String,

    /// Warning texts, in renderer order
    pub conversion_warnings: Vec<String>,

    /// Error texts, in renderer order
    pub conversion_errors: Vec<String>,

    /// Warnings sorted into categories
    pub style_analysis: CategorizedDiagnostics,

    /// One-line summary of the warnings
    pub warning_summary: String,

    /// Number of warnings
    pub warnings_count: usize,

    /// Number of errors
    pub errors_count: usize,

    /// Overall status
    pub status: ConversionStatus,
}

impl ConversionResult {
    /// Check if the renderer reported no errors.
    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }

    /// Check if the renderer reported errors.
    pub fn has_errors(&self) -> bool {
        self.errors_count > 0
    }
}
