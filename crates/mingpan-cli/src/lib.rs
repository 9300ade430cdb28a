//! CLI logic for the Mingpan report renderer.
//!
//! Reads a report record, renders it with the configured theme and writes
//! the PNG next to wherever the caller asked.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use mingpan::{MingpanError, ReportRenderer, report::ReportData};

/// Run the Mingpan CLI application
///
/// Loads the configuration, reads and validates the JSON report record,
/// renders it and writes the resulting PNG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MingpanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON
/// - Records that break the shape contract
/// - Encoding errors
pub fn run(args: &Args) -> Result<(), MingpanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing report"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let theme = app_config.theme().to_theme()?;

    let source = fs::read_to_string(&args.input)?;
    let report = ReportData::from_json(&source)?;
    report.validate()?;

    let renderer = ReportRenderer::new(theme);
    let png = renderer.render(&report)?;

    fs::write(&args.output, png)?;

    info!(output_file = args.output; "PNG exported successfully");

    Ok(())
}
