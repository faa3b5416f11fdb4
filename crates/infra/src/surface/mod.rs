//! Report surfaces

pub mod terminal;

pub use terminal::{SurfaceSnapshot, TerminalSurface};
