//! Error types for Mingpan operations.
//!
//! Rendering itself has exactly one failure path, [`RenderError::Encoding`].
//! The remaining types belong to the boundaries around the renderer: theme
//! configuration ([`ConfigError`]) and input validation ([`ValidationError`]).
//! [`MingpanError`] gathers all of them for callers that drive the whole
//! pipeline.

use std::io;

use thiserror::Error;

/// Failure while turning a painted surface into an image buffer.
///
/// Not retried internally. The whole render may be retried by the caller.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// A report record that breaks the shape contract of [`ReportData`].
///
/// Raised by [`ReportData::validate`] before a render is attempted; the
/// renderer itself never raises it.
///
/// [`ReportData`]: crate::report::ReportData
/// [`ReportData::validate`]: crate::report::ReportData::validate
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("fourPillars must contain exactly 4 entries, found {found}")]
    FourPillarsLength { found: usize },

    #[error("fiveElements must contain exactly 5 scores, found {found}")]
    FiveElementsLength { found: usize },

    #[error("fiveElements score at position {index} is not a finite number")]
    NonFiniteScore { index: usize },
}

/// Invalid theme configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid color for `{role}`: {message}")]
    InvalidColor { role: &'static str, message: String },

    #[error("Invalid value for `{name}`: {value}")]
    InvalidDimension { name: &'static str, value: f32 },
}

/// The main error type for Mingpan operations.
#[derive(Debug, Error)]
pub enum MingpanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid report record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
