//! Terminal output for git-releases.
//!
//! Formatting is kept in pure functions so it can be tested; the `display_*`
//! functions only print.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::config::OutputFormat;
use crate::domain::Version;
use crate::error::Result;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Render versions in the requested format
///
/// Plain output is one version per line in display form. JSON output is an
/// array of version strings.
pub fn format_versions(versions: &[Version], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(versions
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(versions)?),
    }
}

pub fn display_versions(versions: &[Version], format: OutputFormat) -> Result<()> {
    let rendered = format_versions(versions, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}
