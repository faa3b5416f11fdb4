//! # Wellscope Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The HTTP client and the analysis service adapter built on it
//! - Configuration loading from environment and files
//! - The terminal implementation of the report surface
//! - Conversions from infrastructure errors into `ReportError`
//!
//! ## Architecture
//! - Implements traits defined in `wellscope-core`
//! - Contains all "impure" code (network, filesystem, terminal)

pub mod analysis;
pub mod config;
pub mod errors;
pub mod http;
pub mod surface;

// Re-export commonly used items
pub use analysis::HttpAnalysisClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use surface::{SurfaceSnapshot, TerminalSurface};
