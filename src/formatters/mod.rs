// ABOUTME: Output format abstraction for nutrition reports, recipe listings and match probes
// ABOUTME: Human-readable text (rounded to one decimal) or full-precision pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, summary boxes and tables for terminals. Every
//!   figure is rounded to one decimal.
//! - **JSON**: Pretty-printed, full precision, for scripts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ricettario::formatters::{format_report, ReportFormat};
//!
//! let analysis = service.analyze("12").await?;
//! let output = format_report(&analysis, ReportFormat::Text)?;
//! println!("{}", output.data);
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Plain-text renderers
pub mod text;

pub use text::TextReport;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: ReportFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: ReportFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Round to one decimal place, as shown in every text report
#[must_use]
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_report<T>(data: &T, format: ReportFormat) -> Result<FormattedOutput, FormatError>
where
    T: Serialize + TextReport + ?Sized,
{
    let data = match format {
        ReportFormat::Text => data.render_text(),
        ReportFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
