//! Time utilities and abstractions
//!
//! - **[`timer`]**: recurring timers with explicit cancellation handles

pub mod timer;

// Re-export commonly used items
pub use timer::{recurring, TickFlow, TimerHandle};
