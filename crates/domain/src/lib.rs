//! # Wellscope Domain
//!
//! Shared data shapes for the wellbeing report client.
//!
//! This crate contains:
//! - The usage report sent to the analysis service and the analysis result
//!   it returns
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (endpoint paths, fixed messages, animation timings)
//!
//! ## Architecture
//! - No dependencies on other Wellscope crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
