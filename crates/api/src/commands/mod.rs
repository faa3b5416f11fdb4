//! CLI commands
//!
//! Each command drives the context the way a user action would on the
//! report surface.

pub mod analyze;
pub mod health;
pub mod sample;

use std::path::PathBuf;

/// Where the report text for an analysis comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// The built-in sample report.
    Sample,
    /// Read from standard input.
    Stdin,
    File(PathBuf),
}

impl ReportSource {
    /// Map a CLI argument: none or `-` reads stdin.
    pub fn from_arg(path: Option<PathBuf>, sample: bool) -> Self {
        match path {
            _ if sample => Self::Sample,
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }
}
