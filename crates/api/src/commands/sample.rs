//! `wellscope sample`

use std::io::Write;

use wellscope_domain::SAMPLE_REPORT_JSON;

/// Write the sample report JSON, ready to edit and feed back to `analyze`.
///
/// # Errors
/// Fails when the writer does.
pub fn print(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{SAMPLE_REPORT_JSON}")
}
