//! # Wellscope App
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - Commands (CLI subcommand → controller bridge)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::ReportSource;
pub use context::AppContext;
