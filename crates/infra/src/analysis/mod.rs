//! Analysis service adapter

pub mod client;

pub use client::HttpAnalysisClient;
