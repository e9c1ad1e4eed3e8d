//! Domain-specific analysis modules
//!
//! This module contains the analysis logic for:
//! - Exploratory statistics and aggregates
//! - Business insight generation

pub mod constants;
pub mod exploratory;
pub mod insights;
pub mod stats;

// Re-export analysis entry points for convenience
pub use exploratory::{build_report, write_exploratory_report, ExploratoryReport};
pub use insights::{generate_insights, write_insights};
