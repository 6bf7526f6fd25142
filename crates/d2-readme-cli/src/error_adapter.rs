//! Error adapter for converting [`Error`] to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan};

use d2_readme::Error;

/// Adapter giving an [`Error`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a Error);

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

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            Error::Io(_) => "d2_readme::io",
            Error::OutsideRoot { .. } => "d2_readme::outside_root",
            Error::Config(_) => "d2_readme::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            Error::Io(_) => return None,
            Error::OutsideRoot { .. } => {
                "pass directories inside the project, or use --root to pick another project"
            }
            Error::Config(_) => "check the [files] and [titles] sections of the configuration file",
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

const REPORT_WIDTH: usize = 120;

/// Renders `err` as a miette report without colors.
pub fn render_report(err: &Error) -> String {
    let mut report = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .with_width(REPORT_WIDTH);
    if handler.render_report(&mut report, &ErrorAdapter(err)).is_err() {
        report = err.to_string();
    }
    report
}
