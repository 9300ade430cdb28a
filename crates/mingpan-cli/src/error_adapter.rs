//! Error adapter for converting MingpanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error, fmt};

use miette::Diagnostic as MietteDiagnostic;

use mingpan::MingpanError;

/// Adapter that renders a [`MingpanError`] as a miette diagnostic.
///
/// Every variant gets a stable code (`mingpan::io`, `mingpan::json`,
/// `mingpan::config`, `mingpan::validation`, `mingpan::render`) and, where
/// the fix is usually the same, a help line.
pub struct ErrorAdapter<'a>(pub &'a MingpanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MingpanError::Io(_) => "mingpan::io",
            MingpanError::Json(_) => "mingpan::json",
            MingpanError::Config(_) => "mingpan::config",
            MingpanError::Validation(_) => "mingpan::validation",
            MingpanError::Render(_) => "mingpan::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            MingpanError::Json(_) => {
                "the input must be a JSON object with camelCase report fields"
            }
            MingpanError::Config(_) => "check the [theme] section of the configuration file",
            MingpanError::Validation(_) => {
                "fourPillars needs 4 codes and fiveElements 5 finite scores"
            }
            MingpanError::Io(_) | MingpanError::Render(_) => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use mingpan::{ConfigError, RenderError, ValidationError, report::ReportData};

    use super::*;

    fn code_of(err: &MingpanError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_codes_per_variant() {
        let io = MingpanError::Io(std::io::Error::other("disk full"));
        let json = ReportData::from_json("not json").unwrap_err();
        let config = MingpanError::Config(ConfigError::InvalidDimension {
            name: "gap",
            value: -1.0,
        });
        let validation = MingpanError::Validation(ValidationError::FiveElementsLength { found: 3 });
        let render = MingpanError::Render(RenderError::Encoding("boom".to_string()));

        assert_eq!(code_of(&io), "mingpan::io");
        assert_eq!(code_of(&json), "mingpan::json");
        assert_eq!(code_of(&config), "mingpan::config");
        assert_eq!(code_of(&validation), "mingpan::validation");
        assert_eq!(code_of(&render), "mingpan::render");
    }

    #[test]
    fn test_display_and_help() {
        let err = MingpanError::Validation(ValidationError::FourPillarsLength { found: 2 });
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.to_string(),
            "Validation error: fourPillars must contain exactly 4 entries, found 2"
        );
        assert!(adapter.help().is_some());

        let render = MingpanError::Render(RenderError::Encoding("boom".to_string()));
        assert!(ErrorAdapter(&render).help().is_none());
    }

    #[test]
    fn test_no_source_spans() {
        let json = ReportData::from_json("{").unwrap_err();
        let adapter = ErrorAdapter(&json);

        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = MingpanError::Validation(ValidationError::NonFiniteScore { index: 1 });
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("mingpan::validation"));
    }
}
