//! Common infrastructure modules shared across analysis stages
//!
//! This module provides reusable infrastructure for:
//! - Report row types and ASCII table formatting
//! - Rendering the dashboard charts

pub mod plots;
pub mod tables;

// Re-export commonly used items
pub use plots::PlotError;
